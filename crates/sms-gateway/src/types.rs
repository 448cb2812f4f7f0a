//! SMS gateway wire types.

use serde::{Deserialize, Serialize};

/// Outgoing message request.
#[derive(Debug, Clone, Serialize)]
pub struct OutgoingSms {
    /// Recipient in E.164 form
    pub to: String,
    /// Sender ID shown on the handset
    pub from: String,
    pub body: String,
}

/// Gateway acknowledgement.
#[derive(Debug, Clone, Deserialize)]
pub struct SendReceipt {
    pub message_id: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Placeholder substituted with the code in a message template.
pub const CODE_PLACEHOLDER: &str = "{code}";

/// A message body with a `{code}` placeholder.
#[derive(Debug, Clone)]
pub struct MessageTemplate(String);

impl MessageTemplate {
    pub fn new(template: impl Into<String>) -> Result<Self, crate::SmsError> {
        let template = template.into();
        if !template.contains(CODE_PLACEHOLDER) {
            return Err(crate::SmsError::InvalidTemplate(template));
        }
        Ok(Self(template))
    }

    /// Fill in the code.
    pub fn render(&self, code: &str) -> String {
        self.0.replace(CODE_PLACEHOLDER, code)
    }
}
