//! Bundled course catalog and its enumerations.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;

use serde::{Deserialize, Serialize};

use crate::course::Course;

const BUNDLED_COURSES_JSON: &str = include_str!("../data/courses.json");

static BUNDLED_CATALOG: Lazy<CourseCatalog> =
    Lazy::new(|| CourseCatalog::from_json(BUNDLED_COURSES_JSON).expect("bundled catalog"));

/// Number of courses shown in the home page "featured" section.
pub const FEATURED_COURSE_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CourseCatalog {
    categories: Vec<String>,
    durations: Vec<String>,
    courses: Vec<Course>,
}

impl CourseCatalog {
    /// The catalog shipped with the site. Immutable for the life of the process.
    pub fn bundled() -> &'static CourseCatalog {
        &BUNDLED_CATALOG
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let catalog: CourseCatalog = serde_json::from_str(json)?;
        catalog.check()?;
        Ok(catalog)
    }

    pub fn new(categories: Vec<String>, durations: Vec<String>, courses: Vec<Course>) -> anyhow::Result<Self> {
        let catalog = Self { categories, durations, courses };
        catalog.check()?;
        Ok(catalog)
    }

    fn check(&self) -> anyhow::Result<()> {
        let mut seen = BTreeSet::new();
        for course in &self.courses {
            if !seen.insert(course.id.as_str()) {
                anyhow::bail!("duplicate course id: {}", course.id);
            }
            if !self.is_known_category(&course.category) {
                anyhow::bail!("course {} has unknown category {:?}", course.id, course.category);
            }
            if !self.durations.contains(&course.duration) {
                anyhow::bail!("course {} has unknown duration {:?}", course.id, course.duration);
            }
        }
        Ok(())
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn durations(&self) -> &[String] {
        &self.durations
    }

    pub fn is_known_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    pub fn find_course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Other courses in the same category, in catalog order.
    pub fn related_courses(&self, course: &Course, limit: usize) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.id != course.id && c.category == course.category)
            .take(limit)
            .collect()
    }

    pub fn featured_courses(&self, count: usize) -> &[Course] {
        &self.courses[..count.min(self.courses.len())]
    }

    pub fn courses_in_category_count(&self, category: &str) -> usize {
        self.courses.iter().filter(|c| c.category == category).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_loads() {
        let catalog = CourseCatalog::from_json(BUNDLED_COURSES_JSON).expect("bundled catalog must parse");
        assert!(!catalog.courses().is_empty());
        assert_eq!(catalog.courses().len(), CourseCatalog::bundled().courses().len());
        for category in catalog.categories() {
            assert!(catalog.courses_in_category_count(category) > 0, "empty category {category}");
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{
            "categories": ["Programming"],
            "durations": ["4 Weeks"],
            "courses": [
                {"id": "java", "title": "Java", "short": "", "description": "", "category": "Programming", "duration": "4 Weeks"},
                {"id": "java", "title": "Java 2", "short": "", "description": "", "category": "Programming", "duration": "4 Weeks"}
            ]
        }"#;
        let err = CourseCatalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate course id"));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let json = r#"{
            "categories": ["Programming"],
            "durations": ["4 Weeks"],
            "courses": [
                {"id": "tally", "title": "Tally", "short": "", "description": "", "category": "Accounts", "duration": "4 Weeks"}
            ]
        }"#;
        assert!(CourseCatalog::from_json(json).is_err());
    }

    #[test]
    fn lookup_related_and_featured() {
        let catalog = CourseCatalog::bundled();
        let first = &catalog.courses()[0];
        assert_eq!(catalog.find_course(&first.id), Some(first));
        assert_eq!(catalog.find_course("no-such-course"), None);

        let related = catalog.related_courses(first, 3);
        assert!(related.len() <= 3);
        assert!(related.iter().all(|c| c.category == first.category && c.id != first.id));

        assert_eq!(catalog.featured_courses(FEATURED_COURSE_COUNT).len(), FEATURED_COURSE_COUNT.min(catalog.courses().len()));
        assert_eq!(catalog.featured_courses(10_000).len(), catalog.courses().len());
    }
}
