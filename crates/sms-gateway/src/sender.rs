//! Code delivery channels.

use crate::client::SmsGatewayClient;
use crate::error::SmsError;
use crate::types::MessageTemplate;
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, warn};

/// Something that can get a one-time code to a phone.
#[async_trait]
pub trait CodeSender: Send + Sync {
    /// Channel name, for logs and health output.
    fn name(&self) -> &str;

    /// Deliver `code` to `recipient` (E.164).
    async fn deliver(&self, recipient: &str, code: &SecretString) -> Result<(), SmsError>;

    /// Whether the channel can currently deliver.
    async fn health_check(&self) -> bool {
        true
    }
}

/// Development channel: writes the code to the operator log.
///
/// Never use this where the log is visible to anyone but the person
/// registering.
#[derive(Debug, Clone, Default)]
pub struct LogSender;

#[async_trait]
impl CodeSender for LogSender {
    fn name(&self) -> &str {
        "log"
    }

    async fn deliver(&self, recipient: &str, code: &SecretString) -> Result<(), SmsError> {
        warn!(
            recipient,
            code = %code.expose_secret(),
            "Development code sender: OTP written to log instead of SMS"
        );
        Ok(())
    }
}

/// Sends the code as an SMS through [`SmsGatewayClient`].
#[derive(Clone)]
pub struct SmsCodeSender {
    client: SmsGatewayClient,
    template: MessageTemplate,
}

impl SmsCodeSender {
    pub fn new(client: SmsGatewayClient, template: MessageTemplate) -> Self {
        Self { client, template }
    }
}

#[async_trait]
impl CodeSender for SmsCodeSender {
    fn name(&self) -> &str {
        "sms_gateway"
    }

    async fn deliver(&self, recipient: &str, code: &SecretString) -> Result<(), SmsError> {
        let body = self.template.render(code.expose_secret());
        let receipt = self.client.send(recipient, &body).await?;
        info!(message_id = %receipt.message_id, "Verification code sent");
        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.client.health_check().await
    }
}
