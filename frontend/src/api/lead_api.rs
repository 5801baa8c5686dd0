//! Client API calls for lead capture endpoints.

use common::lead_capture::{ContactInquiry, LeadReceipt, LeadSubmission};
use dioxus::prelude::*;


#[server]
pub async fn submit_enrollment(lead: LeadSubmission) -> Result<LeadReceipt, ServerFnError> {
    let x = backend::api::leads::submit_enrollment(lead).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn submit_contact_inquiry(inquiry: ContactInquiry) -> Result<LeadReceipt, ServerFnError> {
    let x = backend::api::leads::submit_contact_inquiry(inquiry).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
