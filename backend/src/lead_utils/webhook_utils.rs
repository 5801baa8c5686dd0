//! Optional forwarding of leads to an external webhook.

use std::time::Duration;

use anyhow::Context;
use serde::Serialize;
use tracing::info;

const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 10;

/// `LEADS_WEBHOOK_URL`; leads are only logged when it is unset or blank.
pub fn get_leads_webhook_url() -> Option<String> {
    std::env::var("LEADS_WEBHOOK_URL").ok().filter(|url| !url.trim().is_empty())
}

pub fn get_leads_webhook_timeout() -> Duration {
    let secs = std::env::var("LEADS_WEBHOOK_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_WEBHOOK_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

#[derive(Debug, Serialize)]
struct WebhookEnvelope<'a, T: Serialize> {
    kind: &'a str,
    reference: &'a str,
    received_at: &'a str,
    lead: &'a T,
}

pub async fn forward_lead<T: Serialize>(kind: &str, reference: &str, received_at: &str, lead: &T) -> anyhow::Result<()> {
    let Some(url) = get_leads_webhook_url() else {
        info!("No LEADS_WEBHOOK_URL set, {} lead {} kept in log only", kind, reference);
        return Ok(());
    };
    forward_lead_to(&url, get_leads_webhook_timeout(), kind, reference, received_at, lead).await
}

pub async fn forward_lead_to<T: Serialize>(
    url: &str,
    timeout: Duration,
    kind: &str,
    reference: &str,
    received_at: &str,
    lead: &T,
) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build webhook client")?;
    let envelope = WebhookEnvelope { kind, reference, received_at, lead };
    let response = client
        .post(url)
        .json(&envelope)
        .send()
        .await
        .with_context(|| format!("Failed to reach lead webhook {}", url))?;
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        let response_txt = response.text().await.unwrap_or_default();
        anyhow::bail!("Lead webhook error: {}: {}", status, response_txt);
    }
    info!("Forwarded {} lead {} to webhook ({})", kind, reference, status);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_webhook_is_an_error() {
        let lead = serde_json::json!({"name": "Neha"});
        let result = forward_lead_to(
            "http://127.0.0.1:9/leads",
            Duration::from_secs(2),
            "enrollment",
            "CSG-TEST",
            "2026-10-19T00:00:00+00:00",
            &lead,
        )
        .await;
        assert!(result.is_err());
    }
}
