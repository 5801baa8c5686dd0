//! Plain JSON endpoint for enrollment leads (`POST /api/enroll`).

use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use common::lead_capture::{LeadSubmission, LeadValidationError};

use crate::api::leads::submit_enrollment;

pub async fn enroll(Json(lead): Json<LeadSubmission>) -> Response {
    match submit_enrollment(lead).await {
        Ok(receipt) => (StatusCode::OK, Json(receipt)).into_response(),
        Err(e) => {
            if let Some(invalid) = e.downcast_ref::<LeadValidationError>() {
                tracing::warn!("enroll: rejected lead: {}", invalid);
                return (StatusCode::UNPROCESSABLE_ENTITY, invalid.to_string()).into_response();
            }
            tracing::error!("enroll: request failed: {:#?}", e);
            (StatusCode::BAD_GATEWAY, e.to_string()).into_response()
        }
    }
}
