//! Catalog filter criteria, sentinels and sort keys.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::course::SkillLevel;

/// Select-control labels meaning "no filter" for each categorical criterion.
pub const ALL_CATEGORIES: &str = "All Courses";
pub const ALL_LEVELS: &str = "All Levels";
pub const ALL_DURATIONS: &str = "All Durations";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortKey {
    #[default]
    Title,
    Duration,
    Level,
    /// Any key we do not recognise; keeps dataset order.
    Unsorted,
}

impl SortKey {
    /// Options offered by the "Sort By" select, with their labels.
    pub const OPTIONS: [(SortKey, &'static str); 3] = [
        (SortKey::Title, "Course Name"),
        (SortKey::Duration, "Duration"),
        (SortKey::Level, "Skill Level"),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Duration => "duration",
            SortKey::Level => "level",
            SortKey::Unsorted => "",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "title" => SortKey::Title,
            "duration" => SortKey::Duration,
            "level" => SortKey::Level,
            _ => SortKey::Unsorted,
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User-selected catalog criteria. `None` is the "all" sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterCriteria {
    pub query: String,
    pub category: Option<String>,
    pub level: Option<SkillLevel>,
    pub duration: Option<String>,
    pub sort_key: SortKey,
}

impl FilterCriteria {
    /// Reset search, level, duration and sort in a single update.
    /// The category belongs to the tab strip and is kept.
    pub fn clear(&mut self) {
        *self = Self { category: self.category.take(), ..Self::default() };
    }

    /// Filters shown as "active filter" chips. The category is shown by the tab strip instead.
    pub fn has_active_filters(&self) -> bool {
        !self.query.is_empty() || self.level.is_some() || self.duration.is_some()
    }

    pub fn level_control_value(&self) -> &str {
        self.level.map(|l| l.as_str()).unwrap_or(ALL_LEVELS)
    }

    pub fn duration_control_value(&self) -> &str {
        self.duration.as_deref().unwrap_or(ALL_DURATIONS)
    }

    pub fn set_level_from_control(&mut self, value: &str) {
        self.level = SkillLevel::from_name(value);
    }

    pub fn set_duration_from_control(&mut self, value: &str) {
        self.duration = selection_from_control(value, ALL_DURATIONS);
    }

    pub fn set_sort_from_control(&mut self, value: &str) {
        self.sort_key = SortKey::from_name(value);
    }
}

fn selection_from_control(value: &str, sentinel: &str) -> Option<String> {
    if value == sentinel || value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_keeps_category_and_resets_the_rest() {
        let mut criteria = FilterCriteria {
            query: "java".to_string(),
            category: Some("Programming".to_string()),
            level: Some(SkillLevel::Advanced),
            duration: Some("8 Weeks".to_string()),
            sort_key: SortKey::Level,
        };
        assert!(criteria.has_active_filters());
        criteria.clear();
        assert_eq!(criteria, FilterCriteria { category: Some("Programming".to_string()), ..Default::default() });
        assert_eq!(criteria.sort_key, SortKey::Title);
        assert!(!criteria.has_active_filters());

        let mut criteria = FilterCriteria { query: "tally".to_string(), ..Default::default() };
        criteria.clear();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn control_values_map_sentinels() {
        let mut criteria = FilterCriteria::default();
        assert_eq!(criteria.level_control_value(), ALL_LEVELS);
        assert_eq!(criteria.duration_control_value(), ALL_DURATIONS);

        criteria.set_level_from_control("Intermediate");
        criteria.set_duration_from_control("6 Weeks");
        assert_eq!(criteria.level, Some(SkillLevel::Intermediate));
        assert_eq!(criteria.duration.as_deref(), Some("6 Weeks"));

        criteria.set_level_from_control(ALL_LEVELS);
        criteria.set_duration_from_control(ALL_DURATIONS);
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn unknown_sort_key_is_unsorted() {
        assert_eq!(SortKey::from_name("duration"), SortKey::Duration);
        assert_eq!(SortKey::from_name("price"), SortKey::Unsorted);
        for (key, _label) in SortKey::OPTIONS {
            assert_eq!(SortKey::from_name(key.as_str()), key);
        }
    }
}
