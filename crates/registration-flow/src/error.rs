//! Registration flow errors.

use crate::draft::Stage;
use thiserror::Error;

/// Errors raised by the registration state machine.
///
/// The display text of the two user-facing variants is what the form
/// shows in its alert dialog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("Please enter a valid Indian mobile number")]
    InvalidPhoneFormat,

    #[error("Invalid OTP. Please try again.")]
    OtpMismatch,

    #[error("Operation requires stage {expected}, but the draft is in stage {actual}")]
    WrongStage { expected: Stage, actual: Stage },
}
