//! SOS Taxi registration service.
//!
//! Serves the mobile registration form and the two-stage API behind it:
//! - Phone stage: validate a 10-digit Indian mobile number, issue a code
//! - OTP stage: check the code the user types back
//!
//! Registration state is held per session, in memory only.

pub mod api;
pub mod config;
pub mod delivery;
pub mod error;
pub mod session;

pub use config::Config;
pub use error::RegistrationError;
pub use session::{SessionSnapshot, SessionStore};
