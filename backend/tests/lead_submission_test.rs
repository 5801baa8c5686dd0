//! Lead intake without a configured webhook (LEADS_WEBHOOK_URL unset).

use axum::{Json, http::StatusCode};
use backend::api::leads::{submit_contact_inquiry, submit_enrollment};
use backend::server_extra::enroll_endpoint::enroll;
use common::lead_capture::{ContactInquiry, LeadSubmission, LeadValidationError};
use pretty_assertions::assert_eq;

fn lead() -> LeadSubmission {
    LeadSubmission {
        name: "Rahul Singh".to_string(),
        email: "rahul@example.com".to_string(),
        phone: "+91 63844 92536".to_string(),
        course: "Adobe Photoshop".to_string(),
        experience: Some("some-knowledge".to_string()),
        message: Some("   ".to_string()),
    }
}

#[tokio::test]
async fn valid_enrollment_gets_a_receipt() {
    let receipt = submit_enrollment(lead()).await.expect("lead accepted");
    assert!(receipt.reference.starts_with("CSG-"));
    assert!(chrono::DateTime::parse_from_rfc3339(&receipt.received_at).is_ok());
}

#[tokio::test]
async fn invalid_enrollment_is_a_validation_error() {
    let err = submit_enrollment(LeadSubmission { email: "not-an-email".to_string(), ..lead() })
        .await
        .unwrap_err();
    assert_eq!(err.downcast_ref::<LeadValidationError>(), Some(&LeadValidationError::InvalidEmail));
}

#[tokio::test]
async fn contact_inquiry_is_accepted() {
    let inquiry = ContactInquiry {
        name: "Neha Gupta".to_string(),
        email: "neha@example.com".to_string(),
        phone: None,
        subject: "Weekend batches".to_string(),
        message: "Do you run Tally classes on Sundays?".to_string(),
    };
    assert!(submit_contact_inquiry(inquiry).await.is_ok());
}

#[tokio::test]
async fn enroll_endpoint_maps_status_codes() {
    let ok = enroll(Json(lead())).await;
    assert_eq!(ok.status(), StatusCode::OK);

    let missing_name = enroll(Json(LeadSubmission { name: String::new(), ..lead() })).await;
    assert_eq!(missing_name.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
