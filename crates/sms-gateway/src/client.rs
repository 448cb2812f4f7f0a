//! HTTP SMS gateway client.

use crate::error::SmsError;
use crate::types::*;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for a JSON SMS gateway.
///
/// Messages are POSTed to `{base_url}/v1/messages`. The optional API key
/// is sent as a bearer token and kept in a `SecretString`.
#[derive(Clone)]
pub struct SmsGatewayClient {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
    sender_id: String,
}

impl SmsGatewayClient {
    /// Create a new gateway client.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        sender_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SmsError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.map(SecretString::new),
            sender_id: sender_id.into(),
        })
    }

    /// Check if the gateway is reachable.
    pub async fn health_check(&self) -> bool {
        self.client
            .get(format!("{}/v1/health", self.base_url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    /// Send a text message.
    #[instrument(skip(self, body))]
    pub async fn send(&self, to: &str, body: &str) -> Result<SendReceipt, SmsError> {
        let request = OutgoingSms {
            to: to.to_string(),
            from: self.sender_id.clone(),
            body: body.to_string(),
        };

        let mut builder = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .json(&request);

        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(status, body = %body, "SMS gateway rejected message");
            return Err(SmsError::Rejected { status, body });
        }

        let receipt: SendReceipt = response.json().await?;
        debug!(message_id = %receipt.message_id, "SMS accepted by gateway");
        Ok(receipt)
    }
}
