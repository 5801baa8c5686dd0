//! Lead capture payloads shared by the enroll modal, the contact page and the backend.

use serde::{Deserialize, Serialize};

/// "Processing" delay before the form reports its outcome.
pub const SUBMISSION_DELAY_MS: u32 = 1_500;
/// Time the enroll modal shows its success panel before resetting and closing.
pub const ENROLL_RESET_DELAY_MS: u32 = 2_000;
/// Time the contact page keeps its status banner.
pub const CONTACT_STATUS_CLEAR_MS: u32 = 5_000;

/// Values of the "Experience Level" select, with their labels.
pub const EXPERIENCE_OPTIONS: [(&str, &str); 5] = [
    ("", "Select your experience level"),
    ("beginner", "Complete Beginner"),
    ("some-knowledge", "Some Knowledge"),
    ("intermediate", "Intermediate"),
    ("advanced", "Advanced"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadValidationError {
    MissingField(&'static str),
    InvalidEmail,
}

impl std::fmt::Display for LeadValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Please fill in the {} field", field),
            Self::InvalidEmail => write!(f, "Please enter a valid email address"),
        }
    }
}

impl std::error::Error for LeadValidationError {}

/// An enrollment request from the enroll modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LeadSubmission {
    pub fn for_course(course_title: impl Into<String>) -> Self {
        Self { course: course_title.into(), ..Default::default() }
    }

    /// Trimmed copy; blank optional fields become `None`.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            course: self.course.trim().to_string(),
            experience: non_blank(self.experience.as_deref()),
            message: non_blank(self.message.as_deref()),
        }
    }

    pub fn validate(&self) -> Result<(), LeadValidationError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        check_email(&self.email)?;
        require("phone", &self.phone)?;
        require("course", &self.course)?;
        Ok(())
    }
}

/// A general enquiry from the contact page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactInquiry {
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: non_blank(self.phone.as_deref()),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), LeadValidationError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        check_email(&self.email)?;
        require("subject", &self.subject)?;
        require("message", &self.message)?;
        Ok(())
    }
}

/// Acknowledgement returned by the backend for an accepted lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadReceipt {
    pub reference: String,
    pub received_at: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Invalid(String),
}

impl SubmissionStatus {
    /// Outcome shown to the visitor once the submission call returns.
    ///
    /// A failed call is still reported as success: there is no lead backend
    /// to retry against, so the form behaves as if the lead was taken.
    pub fn from_result<T, E>(_result: &Result<T, E>) -> Self {
        SubmissionStatus::Success
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }
}

fn require(field: &'static str, value: &str) -> Result<(), LeadValidationError> {
    if value.trim().is_empty() {
        return Err(LeadValidationError::MissingField(field));
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), LeadValidationError> {
    match email.trim().split_once('@') {
        Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(LeadValidationError::InvalidEmail),
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_lead() -> LeadSubmission {
        LeadSubmission {
            name: "Priya".to_string(),
            email: "priya@example.com".to_string(),
            phone: "+91 90000 00000".to_string(),
            course: "Java Programming".to_string(),
            experience: None,
            message: None,
        }
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        assert_eq!(valid_lead().validate(), Ok(()));
        let lead = LeadSubmission { name: "  ".to_string(), ..valid_lead() };
        assert_eq!(lead.validate(), Err(LeadValidationError::MissingField("name")));
        let lead = LeadSubmission { phone: String::new(), ..valid_lead() };
        assert_eq!(lead.validate(), Err(LeadValidationError::MissingField("phone")));
        let lead = LeadSubmission { email: "priya.example.com".to_string(), ..valid_lead() };
        assert_eq!(lead.validate(), Err(LeadValidationError::InvalidEmail));
    }

    #[test]
    fn normalized_drops_blank_optionals() {
        let lead = LeadSubmission {
            name: " Priya ".to_string(),
            experience: Some("".to_string()),
            message: Some("  call me after 5  ".to_string()),
            ..valid_lead()
        }
        .normalized();
        assert_eq!(lead.name, "Priya");
        assert_eq!(lead.experience, None);
        assert_eq!(lead.message.as_deref(), Some("call me after 5"));
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let json = serde_json::to_value(valid_lead()).unwrap();
        assert!(json.get("experience").is_none());
        assert!(json.get("message").is_none());
        let parsed: LeadSubmission = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, valid_lead());
    }

    #[test]
    fn failed_submission_still_reports_success() {
        let failed: Result<LeadReceipt, String> = Err("connection refused".to_string());
        assert_eq!(SubmissionStatus::from_result(&failed), SubmissionStatus::Success);
        let ok: Result<(), String> = Ok(());
        assert_eq!(SubmissionStatus::from_result(&ok), SubmissionStatus::Success);
    }

    #[test]
    fn contact_inquiry_requires_subject_and_message() {
        let inquiry = ContactInquiry {
            name: "Rahul".to_string(),
            email: "rahul@example.com".to_string(),
            phone: None,
            subject: "Batch timings".to_string(),
            message: String::new(),
        };
        assert_eq!(inquiry.validate(), Err(LeadValidationError::MissingField("message")));
    }
}
