//! Indian mobile number validation.

use crate::error::FlowError;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// Country calling code shown as the fixed prefix in the form.
pub const COUNTRY_CODE: &str = "+91";

/// Ten ASCII digits, the first one 6-9. `[0-9]` rather than `\d` so that
/// non-ASCII decimal digits are rejected.
const INDIAN_MOBILE_PATTERN: &str = r"^[6-9][0-9]{9}$";

fn indian_mobile_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(INDIAN_MOBILE_PATTERN).expect("static pattern compiles"))
}

/// Check whether `phone` is a 10-digit Indian mobile number.
pub fn is_valid_indian_mobile(phone: &str) -> bool {
    indian_mobile_regex().is_match(phone)
}

/// A validated 10-digit national mobile number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate and wrap a national number.
    ///
    /// The input is taken as typed; no whitespace or prefix stripping.
    pub fn parse(input: &str) -> Result<Self, FlowError> {
        if is_valid_indian_mobile(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(FlowError::InvalidPhoneFormat)
        }
    }

    /// The 10-digit national number.
    pub fn national(&self) -> &str {
        &self.0
    }

    /// The number in E.164 form, e.g. `+919876543210`.
    pub fn e164(&self) -> String {
        format!("{}{}", COUNTRY_CODE, self.0)
    }

    /// Number with the middle digits hidden, for logs.
    pub fn masked(&self) -> String {
        format!("{}******{}", &self.0[..2], &self.0[8..])
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
