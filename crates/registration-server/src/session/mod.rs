//! Registration sessions.
//!
//! Each browser tab gets one session holding one [`RegistrationDraft`].
//! Sessions live in memory only and are dropped after an idle period.

mod store;

pub use store::SessionStore;

use chrono::{DateTime, Utc};
use registration_flow::{RegistrationDraft, Stage, UserType};
use serde::Serialize;
use uuid::Uuid;

/// Read-only view of a session, safe to return to clients.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub stage: Stage,
    /// Role the pending code was issued for, else the last one selected
    pub user_type: UserType,
    /// Masked number a code was issued for, while in `otp_entry`
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SessionSnapshot {
    fn new(session_id: Uuid, draft: &RegistrationDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            session_id,
            stage: draft.stage(),
            user_type: draft.issued_user_type().unwrap_or(draft.user_type()),
            phone_number: draft.verified_phone().map(|p| p.masked()),
            created_at,
        }
    }
}
