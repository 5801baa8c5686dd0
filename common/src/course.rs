//! Shared course record model.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Number of technology chips shown on a course card before "+N more".
pub const CARD_TECHNOLOGY_LIMIT: usize = 3;
/// Syllabus topics shown on the detail page before "Show N More Topics".
pub const SYLLABUS_PREVIEW_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [SkillLevel::Beginner, SkillLevel::Intermediate, SkillLevel::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == name)
    }

    /// Badge colors (background, foreground) used on cards and the detail page.
    pub fn badge_colors(level: Option<SkillLevel>) -> (&'static str, &'static str) {
        match level {
            Some(SkillLevel::Beginner) => ("#DCFCE7", "#166534"),
            Some(SkillLevel::Intermediate) => ("#FEF9C3", "#854D0E"),
            Some(SkillLevel::Advanced) => ("#FEE2E2", "#991B1B"),
            None => ("#F3F4F6", "#1F2937"),
        }
    }
}

impl Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub short: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub level: Option<SkillLevel>,
    pub duration: String,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub fees: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub syllabus: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

impl Course {
    /// Level name used for display and for sorting; unspecified sorts first.
    pub fn level_name(&self) -> &'static str {
        self.level.map(|l| l.as_str()).unwrap_or("")
    }

    /// Technologies shown on a card, and how many were left out.
    pub fn card_technologies(&self) -> (&[String], usize) {
        let shown = self.technologies.len().min(CARD_TECHNOLOGY_LIMIT);
        (&self.technologies[..shown], self.technologies.len() - shown)
    }

    /// Syllabus topics to render, and how many are hidden behind the toggle.
    pub fn syllabus_preview(&self, expanded: bool) -> (&[String], usize) {
        if expanded {
            return (&self.syllabus, 0);
        }
        let shown = self.syllabus.len().min(SYLLABUS_PREVIEW_LEN);
        (&self.syllabus[..shown], self.syllabus.len() - shown)
    }

    /// Question and answer pairs for the detail page FAQ.
    pub fn faq_items(&self) -> Vec<(&'static str, String)> {
        let prerequisites = if self.prerequisites.is_empty() {
            "Basic computer knowledge is recommended.".to_string()
        } else {
            self.prerequisites.join(", ")
        };
        let technologies = if self.technologies.is_empty() {
            "Industry-standard software will be covered.".to_string()
        } else {
            self.technologies.join(", ")
        };
        vec![
            ("What are the prerequisites for this course?", prerequisites),
            ("What software will be used in this course?", technologies),
            (
                "Do you provide course materials?",
                "Yes, we provide comprehensive study materials, practical exercises, and access to necessary software during the course.".to_string(),
            ),
            (
                "Is there any certification provided?",
                "Yes, you will receive a certificate of completion from CSG Education upon successfully finishing the course.".to_string(),
            ),
            (
                "What is the class schedule?",
                "We offer flexible batch timings including morning, afternoon, and weekend batches to suit your schedule.".to_string(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course_with_technologies(technologies: &[&str]) -> Course {
        Course {
            id: "c".to_string(),
            title: "C".to_string(),
            short: String::new(),
            description: String::new(),
            category: "Programming".to_string(),
            level: None,
            duration: "1 Month".to_string(),
            mode: None,
            fees: None,
            instructor: None,
            image: None,
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            syllabus: vec![],
            prerequisites: vec![],
        }
    }

    #[test]
    fn card_technologies_truncates_after_three() {
        let course = course_with_technologies(&["C", "GCC", "Make", "GDB", "Valgrind"]);
        let (shown, hidden) = course.card_technologies();
        assert_eq!(shown, &["C", "GCC", "Make"]);
        assert_eq!(hidden, 2);

        let course = course_with_technologies(&["Tally"]);
        assert_eq!(course.card_technologies(), (&["Tally".to_string()][..], 0));
    }

    #[test]
    fn level_names_round_trip() {
        for level in SkillLevel::ALL {
            assert_eq!(SkillLevel::from_name(level.as_str()), Some(level));
        }
        assert_eq!(SkillLevel::from_name("beginner"), None);
        assert_eq!(course_with_technologies(&[]).level_name(), "");
    }

    #[test]
    fn syllabus_preview_hides_topics_until_expanded() {
        let mut course = course_with_technologies(&[]);
        course.syllabus = (1..=6).map(|i| format!("Topic {i}")).collect();

        let (shown, hidden) = course.syllabus_preview(false);
        assert_eq!(shown.len(), SYLLABUS_PREVIEW_LEN);
        assert_eq!(hidden, 2);

        let (shown, hidden) = course.syllabus_preview(true);
        assert_eq!(shown.len(), 6);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn faq_falls_back_when_lists_are_empty() {
        let course = course_with_technologies(&[]);
        let faq = course.faq_items();
        assert_eq!(faq.len(), 5);
        assert_eq!(faq[0].1, "Basic computer knowledge is recommended.");

        let course = course_with_technologies(&["Python", "Jupyter"]);
        assert_eq!(course.faq_items()[1].1, "Python, Jupyter");
    }
}
