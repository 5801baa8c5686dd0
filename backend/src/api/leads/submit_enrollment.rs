//! Enrollment lead intake.

use anyhow::Context;
use common::lead_capture::{LeadReceipt, LeadSubmission};
use tracing::info;

use crate::lead_utils::{lead_reference::make_lead_reference, webhook_utils::forward_lead};

pub async fn submit_enrollment(lead: LeadSubmission) -> anyhow::Result<LeadReceipt> {
    let lead = lead.normalized();
    lead.validate()?;

    let received_at = chrono::Utc::now();
    let receipt = LeadReceipt {
        reference: make_lead_reference(&lead.email, &received_at),
        received_at: received_at.to_rfc3339(),
    };
    info!(
        reference = %receipt.reference,
        course = %lead.course,
        experience = ?lead.experience,
        "Enrollment lead received"
    );

    forward_lead("enrollment", &receipt.reference, &receipt.received_at, &lead)
        .await
        .context("Failed to forward enrollment lead")?;
    Ok(receipt)
}
