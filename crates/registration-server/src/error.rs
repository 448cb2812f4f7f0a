//! Error types for the registration service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use registration_flow::FlowError;
use serde::Serialize;
use sms_gateway::SmsError;
use thiserror::Error;

/// Service error types.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("{0}")]
    InvalidPhoneFormat(FlowError),

    #[error("{0}")]
    OtpMismatch(FlowError),

    #[error("{0}")]
    WrongStage(FlowError),

    #[error("Registration session not found: {0}")]
    SessionNotFound(String),

    #[error("Could not deliver verification code: {0}")]
    Delivery(#[from] SmsError),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl From<FlowError> for RegistrationError {
    fn from(e: FlowError) -> Self {
        match e {
            FlowError::InvalidPhoneFormat => RegistrationError::InvalidPhoneFormat(e),
            FlowError::OtpMismatch => RegistrationError::OtpMismatch(e),
            FlowError::WrongStage { .. } => RegistrationError::WrongStage(e),
        }
    }
}

impl RegistrationError {
    /// HTTP status and machine-readable code.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            RegistrationError::InvalidPhoneFormat(_) => {
                (StatusCode::BAD_REQUEST, "INVALID_PHONE_FORMAT")
            }
            RegistrationError::OtpMismatch(_) => (StatusCode::BAD_REQUEST, "OTP_MISMATCH"),
            RegistrationError::WrongStage(_) => (StatusCode::CONFLICT, "WRONG_STAGE"),
            RegistrationError::SessionNotFound(_) => (StatusCode::NOT_FOUND, "SESSION_NOT_FOUND"),
            RegistrationError::Delivery(_) => (StatusCode::BAD_GATEWAY, "DELIVERY_FAILED"),
        }
    }
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registration_flow::Stage;

    #[test]
    fn test_flow_errors_keep_alert_text() {
        let err = RegistrationError::from(FlowError::InvalidPhoneFormat);
        assert_eq!(err.to_string(), "Please enter a valid Indian mobile number");
        assert_eq!(
            err.status_and_code(),
            (StatusCode::BAD_REQUEST, "INVALID_PHONE_FORMAT")
        );

        let err = RegistrationError::from(FlowError::OtpMismatch);
        assert_eq!(err.to_string(), "Invalid OTP. Please try again.");
        assert_eq!(err.status_and_code(), (StatusCode::BAD_REQUEST, "OTP_MISMATCH"));
    }

    #[test]
    fn test_wrong_stage_is_conflict() {
        let err = RegistrationError::from(FlowError::WrongStage {
            expected: Stage::OtpEntry,
            actual: Stage::PhoneEntry,
        });
        assert_eq!(err.status_and_code(), (StatusCode::CONFLICT, "WRONG_STAGE"));
    }

    #[test]
    fn test_delivery_failure_is_bad_gateway() {
        let err = RegistrationError::from(SmsError::Rejected {
            status: 500,
            body: "down".into(),
        });
        assert_eq!(err.status_and_code(), (StatusCode::BAD_GATEWAY, "DELIVERY_FAILED"));
    }
}
