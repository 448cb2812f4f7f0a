//! API request and response types.

use registration_flow::{Stage, UserType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub active_sessions: usize,
    pub delivery: String,
    pub delivery_healthy: bool,
}

/// Phone stage submission.
#[derive(Debug, Deserialize)]
pub struct SubmitPhoneRequest {
    /// 10-digit national number, without the +91 prefix
    pub phone: String,

    #[serde(default)]
    pub user_type: UserType,
}

/// Response after a code was issued.
#[derive(Debug, Serialize)]
pub struct SubmitPhoneResponse {
    pub session_id: Uuid,
    pub stage: Stage,
    /// Masked E.164 number the code went to
    pub phone_number: String,
    pub message: String,
}

/// OTP stage submission.
#[derive(Debug, Deserialize)]
pub struct SubmitOtpRequest {
    pub code: String,
}

/// Response after a successful code check.
#[derive(Debug, Serialize)]
pub struct SubmitOtpResponse {
    pub session_id: Uuid,
    pub status: String,
    pub phone_number: String,
    pub user_type: UserType,
    pub message: String,
}
