use common::catalog_filter::filter_and_sort;
use common::course::{Course, SkillLevel};
use common::course_catalog::CourseCatalog;
use common::filter_criteria::{FilterCriteria, SortKey};
use common::url_state::{read_criteria_from_location, write_criteria_to_location, CatalogLocation};
use pretty_assertions::assert_eq;

fn course(title: &str, category: &str, level: SkillLevel, duration: &str) -> Course {
    Course {
        id: title.to_lowercase().replace(' ', "-"),
        title: title.to_string(),
        short: String::new(),
        description: String::new(),
        category: category.to_string(),
        level: Some(level),
        duration: duration.to_string(),
        mode: None,
        fees: None,
        instructor: None,
        image: None,
        technologies: vec![],
        syllabus: vec![],
        prerequisites: vec![],
    }
}

fn small_catalog() -> CourseCatalog {
    CourseCatalog::new(
        vec!["Programming".to_string(), "Non-IT Courses".to_string()],
        vec!["4 Weeks".to_string(), "8 Weeks".to_string()],
        vec![
            course("Python Basics", "Programming", SkillLevel::Beginner, "4 Weeks"),
            course("Advanced Java", "Programming", SkillLevel::Advanced, "8 Weeks"),
            course("Tally Essentials", "Non-IT Courses", SkillLevel::Beginner, "4 Weeks"),
        ],
    )
    .expect("valid catalog")
}

fn titles(result: &[&Course]) -> Vec<String> {
    result.iter().map(|c| c.title.clone()).collect()
}

#[test]
fn category_filter_sorted_by_title() {
    let catalog = small_catalog();
    let criteria = FilterCriteria { category: Some("Programming".to_string()), ..Default::default() };
    assert_eq!(titles(&filter_and_sort(catalog.courses(), &criteria)), vec!["Advanced Java", "Python Basics"]);
}

#[test]
fn query_is_case_insensitive_substring_of_title() {
    let catalog = small_catalog();
    let criteria = FilterCriteria { query: "tally".to_string(), ..Default::default() };
    assert_eq!(titles(&filter_and_sort(catalog.courses(), &criteria)), vec!["Tally Essentials"]);
}

#[test]
fn category_absent_from_dataset_is_empty() {
    let catalog = small_catalog();
    let criteria = FilterCriteria { category: Some("Web Technologies".to_string()), ..Default::default() };
    assert!(filter_and_sort(catalog.courses(), &criteria).is_empty());
}

#[test]
fn all_filters_combine_with_and() {
    let catalog = small_catalog();
    let criteria = FilterCriteria {
        level: Some(SkillLevel::Beginner),
        duration: Some("4 Weeks".to_string()),
        category: Some("Programming".to_string()),
        ..Default::default()
    };
    assert_eq!(titles(&filter_and_sort(catalog.courses(), &criteria)), vec!["Python Basics"]);
}

#[test]
fn default_criteria_return_whole_bundled_catalog_by_title() {
    let catalog = CourseCatalog::bundled();
    let result = filter_and_sort(catalog.courses(), &FilterCriteria::default());
    assert_eq!(result.len(), catalog.courses().len());

    let mut expected = titles(&catalog.courses().iter().collect::<Vec<_>>());
    expected.sort_by(|a, b| common::catalog_filter::locale_compare(a, b));
    assert_eq!(titles(&result), expected);
}

#[test]
fn every_title_substring_finds_its_course() {
    let catalog = CourseCatalog::bundled();
    for course in catalog.courses() {
        let chars = course.title.chars().collect::<Vec<_>>();
        let middle = chars[chars.len() / 4..chars.len() * 3 / 4].iter().collect::<String>();
        let criteria = FilterCriteria { query: middle.to_uppercase(), ..Default::default() };
        let result = filter_and_sort(catalog.courses(), &criteria);
        assert!(result.iter().any(|c| c.id == course.id), "{:?} not found by {:?}", course.title, middle);
    }
}

#[test]
fn category_results_contain_only_that_category() {
    let catalog = CourseCatalog::bundled();
    for category in catalog.categories() {
        let criteria = FilterCriteria { category: Some(category.clone()), ..Default::default() };
        let result = filter_and_sort(catalog.courses(), &criteria);
        assert_eq!(result.len(), catalog.courses_in_category_count(category));
        assert!(result.iter().all(|c| &c.category == category));
    }
}

#[test]
fn duration_sort_is_not_numeric() {
    let catalog = CourseCatalog::bundled();
    let criteria = FilterCriteria { sort_key: SortKey::Duration, ..Default::default() };
    let result = filter_and_sort(catalog.courses(), &criteria);
    let first_two_months = result.iter().position(|c| c.duration == "2 Months").expect("bundled has 2 Months");
    let last_six_weeks = result.iter().rposition(|c| c.duration == "6 Weeks").expect("bundled has 6 Weeks");
    assert!(first_two_months < last_six_weeks);
    let durations = result.iter().map(|c| c.duration.clone()).collect::<Vec<_>>();
    let mut sorted = durations.clone();
    sorted.sort();
    assert_eq!(durations, sorted);
}

#[test]
fn clearing_keeps_category_and_restores_the_rest() {
    let catalog = CourseCatalog::bundled();
    let mut criteria = FilterCriteria {
        query: "java".to_string(),
        category: Some("Programming".to_string()),
        level: Some(SkillLevel::Advanced),
        duration: Some("3 Months".to_string()),
        sort_key: SortKey::Level,
    };
    let narrowed = filter_and_sort(catalog.courses(), &criteria).len();
    assert!(narrowed < catalog.courses().len());

    criteria.clear();
    let category_only = FilterCriteria { category: Some("Programming".to_string()), ..Default::default() };
    assert_eq!(criteria, category_only);
    assert_eq!(
        filter_and_sort(catalog.courses(), &criteria),
        filter_and_sort(catalog.courses(), &category_only)
    );
    assert_eq!(write_criteria_to_location(&criteria), CatalogLocation::for_category("Programming"));

    // with no category selected, clearing is back to the initial state
    criteria.category = None;
    criteria.query = "java".to_string();
    criteria.clear();
    assert_eq!(criteria, FilterCriteria::default());
    assert!(write_criteria_to_location(&criteria).is_empty());
}

#[test]
fn location_seeds_initial_criteria() {
    let catalog = CourseCatalog::bundled();
    let location = CatalogLocation::from("category=Non-IT+Courses&search=tally");
    let criteria = read_criteria_from_location(&location, catalog);
    let result = filter_and_sort(catalog.courses(), &criteria);
    assert_eq!(titles(&result), vec!["Tally ERP"]);
}
