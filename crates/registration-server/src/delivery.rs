//! Builds the configured code delivery channel.

use crate::config::{DeliveryConfig, DeliveryMode};
use anyhow::{Context, Result};
use sms_gateway::{CodeSender, LogSender, MessageTemplate, SmsCodeSender, SmsGatewayClient};
use std::sync::Arc;
use tracing::{info, warn};

/// Create the sender selected by `config.mode`.
pub fn build_sender(config: &DeliveryConfig) -> Result<Arc<dyn CodeSender>> {
    match config.mode {
        DeliveryMode::Log => {
            warn!("Using log code sender; one-time codes will appear in the service log");
            Ok(Arc::new(LogSender))
        }
        DeliveryMode::SmsGateway => {
            let url = config
                .gateway_url
                .as_deref()
                .context("DELIVERY__GATEWAY_URL is required for sms_gateway delivery")?;

            let template = MessageTemplate::new(config.message_template.clone())
                .context("Invalid DELIVERY__MESSAGE_TEMPLATE")?;

            let client = SmsGatewayClient::new(
                url,
                config.api_key.clone(),
                config.sender_id.clone(),
                config.timeout,
            )
            .context("Failed to create SMS gateway client")?;

            info!(gateway_url = %url, sender_id = %config.sender_id, "Using SMS gateway code sender");
            Ok(Arc::new(SmsCodeSender::new(client, template)))
        }
    }
}
