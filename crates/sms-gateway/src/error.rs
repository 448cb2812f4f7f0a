//! SMS gateway errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Gateway rejected message: {status} - {body}")]
    Rejected { status: u16, body: String },

    #[error("Message template must contain {{code}}: {0}")]
    InvalidTemplate(String),
}
