//! Push-notification fan-out
//!
//! Given one payload and N recipients, issue one delivery request per
//! recipient, sequentially, in input order. A failed delivery is
//! recorded in its outcome and the loop continues; there is no retry.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use error_types::{ClientError, Result};

/// Notification content delivered to every recipient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushPayload {
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Per-recipient delivery outcome, positionally aligned with the input
#[derive(Debug, Clone)]
pub struct PushOutcome {
    pub recipient: String,
    pub success: bool,
    pub error: Option<String>,
}

/// Delivery seam; tests substitute an in-process fake
#[async_trait]
pub trait PushTransport: Send + Sync {
    async fn deliver(&self, recipient: &str, payload: &PushPayload) -> Result<()>;
}

/// Push endpoint configuration
#[derive(Debug, Clone)]
pub struct PushConfig {
    pub base_url: String,
    pub api_key: String,
}

impl PushConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("UPLIFT_PUSH_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            api_key: std::env::var("UPLIFT_PUSH_KEY").unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeliveryRequest<'a> {
    recipient: &'a str,
    #[serde(flatten)]
    payload: &'a PushPayload,
}

/// Production transport: one POST per recipient to the push endpoint
#[derive(Clone)]
pub struct HttpPushTransport {
    client: reqwest::Client,
    config: PushConfig,
}

impl HttpPushTransport {
    pub fn new(config: PushConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl PushTransport for HttpPushTransport {
    async fn deliver(&self, recipient: &str, payload: &PushPayload) -> Result<()> {
        let url = format!("{}/push/send", self.config.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&DeliveryRequest { recipient, payload })
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("push delivery failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::from_status(status.as_u16(), message));
        }
        Ok(())
    }
}

/// Deliver a payload to every recipient, one at a time, in input order
pub async fn fan_out<T>(
    transport: &T,
    recipients: &[String],
    payload: &PushPayload,
) -> Vec<PushOutcome>
where
    T: PushTransport + ?Sized,
{
    info!(count = recipients.len(), title = %payload.title, "fanning out push notifications");

    let mut outcomes = Vec::with_capacity(recipients.len());
    for recipient in recipients {
        match transport.deliver(recipient, payload).await {
            Ok(()) => {
                debug!(%recipient, "push delivered");
                outcomes.push(PushOutcome {
                    recipient: recipient.clone(),
                    success: true,
                    error: None,
                });
            }
            Err(e) => {
                warn!(%recipient, error = %e, "push delivery failed");
                outcomes.push(PushOutcome {
                    recipient: recipient.clone(),
                    success: false,
                    error: Some(e.to_string()),
                });
            }
        }
    }
    outcomes
}
