//! The two-stage registration state machine.

use crate::error::FlowError;
use crate::otp::OneTimeCode;
use crate::phone::PhoneNumber;
use crate::types::{Registration, UserType};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Form stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Collecting phone number and user type
    PhoneEntry,
    /// Code sent, collecting it back
    OtpEntry,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::PhoneEntry => f.write_str("phone_entry"),
            Stage::OtpEntry => f.write_str("otp_entry"),
        }
    }
}

/// Internal state. The generated code only exists in `OtpEntry`.
#[derive(Debug, Clone, Default)]
enum DraftState {
    #[default]
    PhoneEntry,
    OtpEntry {
        issue: u64,
        phone: PhoneNumber,
        user_type: UserType,
        code: OneTimeCode,
    },
}

/// A freshly issued code, handed back to the caller for delivery.
#[derive(Debug, Clone)]
pub struct IssuedCode {
    /// Sequence number of this issue within the draft
    pub issue: u64,
    pub phone: PhoneNumber,
    pub user_type: UserType,
    pub code: OneTimeCode,
}

/// Transient registration state for one form session.
#[derive(Debug, Clone, Default)]
pub struct RegistrationDraft {
    phone_input: String,
    user_type: UserType,
    otp_input: String,
    issues: u64,
    state: DraftState,
}

impl RegistrationDraft {
    /// Create a draft in the phone stage.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        match self.state {
            DraftState::PhoneEntry => Stage::PhoneEntry,
            DraftState::OtpEntry { .. } => Stage::OtpEntry,
        }
    }

    /// Last phone number entered, valid or not.
    pub fn phone_input(&self) -> &str {
        &self.phone_input
    }

    /// Last user type selected, accepted or not.
    pub fn user_type(&self) -> UserType {
        self.user_type
    }

    /// The user type the current code was issued for, while in `OtpEntry`.
    pub fn issued_user_type(&self) -> Option<UserType> {
        match &self.state {
            DraftState::PhoneEntry => None,
            DraftState::OtpEntry { user_type, .. } => Some(*user_type),
        }
    }

    /// Last code entered.
    pub fn otp_input(&self) -> &str {
        &self.otp_input
    }

    /// The phone number a code was issued for, while in `OtpEntry`.
    pub fn verified_phone(&self) -> Option<&PhoneNumber> {
        match &self.state {
            DraftState::PhoneEntry => None,
            DraftState::OtpEntry { phone, .. } => Some(phone),
        }
    }

    /// The code awaiting confirmation, while in `OtpEntry`.
    pub fn generated_otp(&self) -> Option<&OneTimeCode> {
        match &self.state {
            DraftState::PhoneEntry => None,
            DraftState::OtpEntry { code, .. } => Some(code),
        }
    }

    /// Submit the phone stage with a freshly generated code.
    pub fn submit_phone(
        &mut self,
        phone: &str,
        user_type: UserType,
    ) -> Result<IssuedCode, FlowError> {
        self.submit_phone_with_code(phone, user_type, OneTimeCode::generate())
    }

    /// Submit the phone stage, drawing the code from `rng`.
    pub fn submit_phone_with<R: Rng>(
        &mut self,
        rng: &mut R,
        phone: &str,
        user_type: UserType,
    ) -> Result<IssuedCode, FlowError> {
        let code = OneTimeCode::generate_with(rng, crate::otp::OTP_LENGTH);
        self.submit_phone_with_code(phone, user_type, code)
    }

    /// Submit the phone stage with a caller-supplied code.
    ///
    /// On an invalid number the stage and any previously issued code are
    /// left untouched. On success any previous code is replaced.
    pub fn submit_phone_with_code(
        &mut self,
        phone: &str,
        user_type: UserType,
        code: OneTimeCode,
    ) -> Result<IssuedCode, FlowError> {
        self.phone_input = phone.to_string();
        self.user_type = user_type;

        let phone = PhoneNumber::parse(phone)?;

        debug!(phone = %phone.masked(), %user_type, "Issuing one-time code");

        self.issues += 1;
        self.otp_input.clear();
        self.state = DraftState::OtpEntry {
            issue: self.issues,
            phone: phone.clone(),
            user_type,
            code: code.clone(),
        };

        Ok(IssuedCode {
            issue: self.issues,
            phone,
            user_type,
            code,
        })
    }

    /// Submit the OTP stage.
    ///
    /// A match reports the registration; the draft stays in `OtpEntry`.
    pub fn submit_otp(&mut self, code: &str) -> Result<Registration, FlowError> {
        self.otp_input = code.to_string();

        match &self.state {
            DraftState::PhoneEntry => Err(FlowError::WrongStage {
                expected: Stage::OtpEntry,
                actual: Stage::PhoneEntry,
            }),
            DraftState::OtpEntry {
                phone,
                user_type,
                code: issued,
                ..
            } => {
                if !issued.matches(code) {
                    debug!(phone = %phone.masked(), "One-time code mismatch");
                    return Err(FlowError::OtpMismatch);
                }

                Ok(Registration {
                    phone_number: phone.e164(),
                    user_type: *user_type,
                })
            }
        }
    }

    /// Drop the code from issue `issue` and return to the phone stage.
    ///
    /// Does nothing and returns `false` if the draft no longer holds that
    /// issue, e.g. because a later submission replaced it.
    pub fn abandon_code(&mut self, issue: u64) -> bool {
        match &self.state {
            DraftState::OtpEntry {
                issue: current,
                phone,
                ..
            } if *current == issue => {
                debug!(phone = %phone.masked(), issue, "Abandoned issued code");
            }
            _ => return false,
        }

        self.state = DraftState::PhoneEntry;
        self.otp_input.clear();
        true
    }
}
