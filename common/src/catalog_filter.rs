//! Catalog search, filter and sort pipeline.
//!
//! Pure functions over the immutable course list: no UI state, no routing.

use std::cmp::Ordering;

use crate::course::Course;
use crate::filter_criteria::{FilterCriteria, SortKey};

/// Courses matching every criterion, ordered by `criteria.sort_key`.
/// The input is never reordered or modified.
pub fn filter_and_sort<'a>(courses: &'a [Course], criteria: &FilterCriteria) -> Vec<&'a Course> {
    let query = criteria.query.to_lowercase();
    let mut filtered = courses
        .iter()
        .filter(|course| {
            matches_query(course, &query)
                && matches_selection(criteria.category.as_deref(), &course.category)
                && matches_level(criteria, course)
                && matches_selection(criteria.duration.as_deref(), &course.duration)
        })
        .collect::<Vec<_>>();

    // sort_by is stable: ties keep dataset order
    match criteria.sort_key {
        SortKey::Title => filtered.sort_by(|a, b| locale_compare(&a.title, &b.title)),
        SortKey::Duration => filtered.sort_by(|a, b| locale_compare(&a.duration, &b.duration)),
        SortKey::Level => filtered.sort_by(|a, b| locale_compare(a.level_name(), b.level_name())),
        SortKey::Unsorted => {}
    }
    filtered
}

/// `lowercase_query` must already be lower-cased. Empty matches everything.
pub fn matches_query(course: &Course, lowercase_query: &str) -> bool {
    if lowercase_query.is_empty() {
        return true;
    }
    let hit = |field: &str| field.to_lowercase().contains(lowercase_query);
    hit(&course.title)
        || hit(&course.short)
        || hit(&course.category)
        || course.technologies.iter().any(|tech| hit(tech))
}

fn matches_selection(selected: Option<&str>, value: &str) -> bool {
    match selected {
        None => true,
        Some(selected) => selected == value,
    }
}

fn matches_level(criteria: &FilterCriteria, course: &Course) -> bool {
    match criteria.level {
        None => true,
        Some(level) => course.level == Some(level),
    }
}

/// Case-insensitive text order; words differing only in case put lowercase first.
/// Digits and spaces compare by code point: "2 Months" < "6 Weeks".
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a))
}

pub fn results_summary(count: usize) -> String {
    match count {
        0 => "No courses found".to_string(),
        1 => "1 course found".to_string(),
        n => format!("{} courses found", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::SkillLevel;

    fn course(id: &str, title: &str, level: Option<SkillLevel>, duration: &str) -> Course {
        Course {
            id: id.to_string(),
            title: title.to_string(),
            short: format!("About {title}"),
            description: String::new(),
            category: "Programming".to_string(),
            level,
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

    fn titles(result: &[&Course]) -> Vec<String> {
        result.iter().map(|c| c.title.clone()).collect()
    }

    #[test]
    fn duration_sort_is_textual() {
        let courses = vec![
            course("a", "A", None, "6 Weeks"),
            course("b", "B", None, "2 Months"),
            course("c", "C", None, "10 Weeks"),
        ];
        let criteria = FilterCriteria { sort_key: SortKey::Duration, ..Default::default() };
        let result = filter_and_sort(&courses, &criteria);
        assert_eq!(titles(&result), vec!["C", "B", "A"]);
    }

    #[test]
    fn level_sort_is_alphabetical_not_by_difficulty() {
        let courses = vec![
            course("i", "I", Some(SkillLevel::Intermediate), "4 Weeks"),
            course("b", "B", Some(SkillLevel::Beginner), "4 Weeks"),
            course("n", "N", None, "4 Weeks"),
            course("a", "A", Some(SkillLevel::Advanced), "4 Weeks"),
        ];
        let criteria = FilterCriteria { sort_key: SortKey::Level, ..Default::default() };
        let result = filter_and_sort(&courses, &criteria);
        assert_eq!(titles(&result), vec!["N", "A", "B", "I"]);
    }

    #[test]
    fn unsorted_keeps_dataset_order_and_ties_are_stable() {
        let courses = vec![
            course("z", "Zeta", None, "4 Weeks"),
            course("a", "Alpha", None, "8 Weeks"),
            course("m", "Mu", None, "4 Weeks"),
        ];
        let criteria = FilterCriteria { sort_key: SortKey::Unsorted, ..Default::default() };
        assert_eq!(titles(&filter_and_sort(&courses, &criteria)), vec!["Zeta", "Alpha", "Mu"]);

        let criteria = FilterCriteria { sort_key: SortKey::Duration, ..Default::default() };
        assert_eq!(titles(&filter_and_sort(&courses, &criteria)), vec!["Zeta", "Mu", "Alpha"]);
    }

    #[test]
    fn query_matches_technologies_case_insensitively() {
        let mut java = course("java", "Enterprise Apps", None, "8 Weeks");
        java.technologies = vec!["Servlets".to_string(), "JSP".to_string()];
        let courses = vec![java, course("py", "Python", None, "4 Weeks")];
        let criteria = FilterCriteria { query: "jsp".to_string(), ..Default::default() };
        assert_eq!(titles(&filter_and_sort(&courses, &criteria)), vec!["Enterprise Apps"]);
    }

    #[test]
    fn locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("apple", "Apple"), Ordering::Less);
        assert_eq!(locale_compare("Apple", "apple"), Ordering::Greater);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn summary_text() {
        assert_eq!(results_summary(0), "No courses found");
        assert_eq!(results_summary(1), "1 course found");
        assert_eq!(results_summary(12), "12 courses found");
    }
}
