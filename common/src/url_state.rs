//! Catalog criteria <-> URL query string adapter.
//!
//! Only `category` and `search` live in the URL; level, duration and sort
//! stay local to the catalog view.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::course_catalog::CourseCatalog;
use crate::filter_criteria::FilterCriteria;

/// Query parameters of the `/courses` route. A missing parameter means its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl CatalogLocation {
    pub fn for_category(category: impl Into<String>) -> Self {
        Self { category: Some(category.into()), search: None }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.search.is_none()
    }
}

// Parsing never fails: a malformed query string is treated as no parameters.
impl From<&str> for CatalogLocation {
    fn from(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let parsed: CatalogLocation = serde_qs::from_str(query).unwrap_or_default();
        Self {
            category: parsed.category.filter(|c| !c.is_empty()),
            search: parsed.search.filter(|s| !s.is_empty()),
        }
    }
}

// The router percent-decodes the query once before `From<&str>` sees it and
// does not escape `%` when writing, so escapes are written twice here.
impl Display for CatalogLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Ok(query) = serde_qs::to_string(self) {
            write!(f, "{}", query.replace('%', "%25"))?;
        }
        Ok(())
    }
}

/// Initial criteria for the catalog view. Categories unknown to `catalog` are ignored.
pub fn read_criteria_from_location(location: &CatalogLocation, catalog: &CourseCatalog) -> FilterCriteria {
    FilterCriteria {
        query: location.search.clone().unwrap_or_default(),
        category: location.category.clone().filter(|c| catalog.is_known_category(c)),
        ..Default::default()
    }
}

/// URL parameters reflecting `criteria`, omitting those equal to their default.
pub fn write_criteria_to_location(criteria: &FilterCriteria) -> CatalogLocation {
    CatalogLocation {
        category: criteria.category.clone(),
        search: Some(criteria.query.clone()).filter(|q| !q.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::SkillLevel;
    use crate::filter_criteria::SortKey;

    #[test]
    fn default_criteria_write_no_parameters() {
        let location = write_criteria_to_location(&FilterCriteria::default());
        assert!(location.is_empty());
        assert_eq!(location.to_string(), "");
    }

    #[test]
    fn local_only_fields_are_not_written() {
        let criteria = FilterCriteria {
            level: Some(SkillLevel::Beginner),
            duration: Some("4 Weeks".to_string()),
            sort_key: SortKey::Level,
            ..Default::default()
        };
        assert!(write_criteria_to_location(&criteria).is_empty());
    }

    #[test]
    fn category_and_search_round_trip() {
        let catalog = CourseCatalog::bundled();
        let criteria = FilterCriteria {
            query: "photo shop".to_string(),
            category: Some("Design & Animation".to_string()),
            ..Default::default()
        };
        let encoded = write_criteria_to_location(&criteria).to_string();
        let location = CatalogLocation::from(decode_like_router(&encoded).as_str());
        assert_eq!(read_criteria_from_location(&location, catalog), criteria);
    }

    /// The query string as the route receives it: percent-decoded once.
    fn decode_like_router(query: &str) -> String {
        urlencoding::decode(query).map(|q| q.into_owned()).unwrap_or_default()
    }

    #[test]
    fn reserved_characters_survive_the_router() {
        let catalog = CourseCatalog::bundled();
        for (query, category) in [
            ("", Some("Design & Animation")),
            ("C++", None),
            ("java", Some("Programming")),
            ("50% off & more", Some("Non-IT Courses")),
        ] {
            let criteria = FilterCriteria {
                query: query.to_string(),
                category: category.map(str::to_string),
                ..Default::default()
            };
            let in_address_bar = write_criteria_to_location(&criteria).to_string();
            let location = CatalogLocation::from(decode_like_router(&in_address_bar).as_str());
            assert_eq!(read_criteria_from_location(&location, catalog), criteria, "{in_address_bar}");
        }
    }

    #[test]
    fn ampersand_category_is_escaped_in_address_bar() {
        let location = CatalogLocation::for_category("Design & Animation");
        assert_eq!(location.to_string(), "category=Design+%2526+Animation");
    }

    #[test]
    fn unknown_category_is_ignored() {
        let catalog = CourseCatalog::bundled();
        let location = CatalogLocation::from("?category=Cooking&search=java");
        let criteria = read_criteria_from_location(&location, catalog);
        assert_eq!(criteria.category, None);
        assert_eq!(criteria.query, "java");
    }

    #[test]
    fn empty_and_missing_parameters_are_defaults() {
        assert!(CatalogLocation::from("").is_empty());
        assert!(CatalogLocation::from("category=&search=").is_empty());
        assert_eq!(CatalogLocation::from("search=tally"), CatalogLocation { category: None, search: Some("tally".to_string()) });
    }
}
