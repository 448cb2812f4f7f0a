//! One-time numeric codes.

use rand::{rngs::OsRng, Rng};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Number of digits in a generated code.
pub const OTP_LENGTH: usize = 6;

/// A one-time numeric code.
///
/// The digits are held in a `SecretString` so they never show up in
/// `Debug` output; reading them requires an explicit `expose`.
#[derive(Clone)]
pub struct OneTimeCode(SecretString);

impl OneTimeCode {
    /// Generate a fresh code of [`OTP_LENGTH`] digits.
    pub fn generate() -> Self {
        Self::generate_with(&mut OsRng, OTP_LENGTH)
    }

    /// Generate a code of `length` digits from the given RNG.
    ///
    /// Each digit is drawn uniformly from 0-9.
    pub fn generate_with<R: Rng>(rng: &mut R, length: usize) -> Self {
        let digits: String = (0..length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();
        Self(SecretString::new(digits))
    }

    /// Wrap an already-known code. Returns `None` unless `digits` is all
    /// ASCII digits and non-empty.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(SecretString::new(digits.to_string())))
        } else {
            None
        }
    }

    /// Compare a user-supplied code against this one.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.expose_secret() == candidate
    }

    /// The secret digits, for handing to a delivery channel.
    pub fn secret(&self) -> &SecretString {
        &self.0
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.expose_secret().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for OneTimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OneTimeCode([REDACTED])")
    }
}
