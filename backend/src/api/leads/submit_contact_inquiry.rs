//! Contact page inquiry intake.

use anyhow::Context;
use common::lead_capture::{ContactInquiry, LeadReceipt};
use tracing::info;

use crate::lead_utils::{lead_reference::make_lead_reference, webhook_utils::forward_lead};

pub async fn submit_contact_inquiry(inquiry: ContactInquiry) -> anyhow::Result<LeadReceipt> {
    let inquiry = inquiry.normalized();
    inquiry.validate()?;

    let received_at = chrono::Utc::now();
    let receipt = LeadReceipt {
        reference: make_lead_reference(&inquiry.email, &received_at),
        received_at: received_at.to_rfc3339(),
    };
    info!(reference = %receipt.reference, subject = %inquiry.subject, "Contact inquiry received");

    forward_lead("contact", &receipt.reference, &receipt.received_at, &inquiry)
        .await
        .context("Failed to forward contact inquiry")?;
    Ok(receipt)
}
