//! Phone-then-code registration flow.
//!
//! A [`RegistrationDraft`] starts in [`Stage::PhoneEntry`]. Submitting a
//! valid Indian mobile number issues a six-digit [`OneTimeCode`] and moves
//! the draft to [`Stage::OtpEntry`]; submitting the matching code reports a
//! [`Registration`]. Nothing here performs I/O: delivering the code is the
//! caller's job.

mod draft;
mod error;
mod otp;
mod phone;
mod types;

pub use draft::{IssuedCode, RegistrationDraft, Stage};
pub use error::FlowError;
pub use otp::{OneTimeCode, OTP_LENGTH};
pub use phone::{is_valid_indian_mobile, PhoneNumber, COUNTRY_CODE};
pub use types::{Registration, UserType};
