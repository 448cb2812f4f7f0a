//! In-memory session storage with idle expiry.

use super::SessionSnapshot;
use chrono::{DateTime, Utc};
use registration_flow::RegistrationDraft;
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// How often expired sessions are swept.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

struct SessionEntry {
    draft: RegistrationDraft,
    created_at: DateTime<Utc>,
    expires_at: Instant,
}

type SessionMap = HashMap<Uuid, SessionEntry>;

/// In-memory session store.
///
/// Every access refreshes the session's idle deadline. A background task
/// sweeps expired sessions and stops once the store is dropped.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<SessionMap>>,
    ttl: Duration,
}

impl SessionStore {
    /// Create a new store. Must be called inside a tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        let sessions = Arc::new(RwLock::new(HashMap::new()));

        tokio::spawn(cleanup_loop(Arc::downgrade(&sessions)));

        info!("In-memory session store initialized (ttl={:?})", ttl);

        Self { sessions, ttl }
    }

    /// Start a new session in the phone stage.
    pub async fn create(&self) -> SessionSnapshot {
        let id = Uuid::new_v4();
        let entry = SessionEntry {
            draft: RegistrationDraft::new(),
            created_at: Utc::now(),
            expires_at: Instant::now() + self.ttl,
        };
        let snapshot = SessionSnapshot::new(id, &entry.draft, entry.created_at);

        self.sessions.write().await.insert(id, entry);
        debug!(session_id = %id, "Created registration session");

        snapshot
    }

    /// Current view of a session.
    pub async fn snapshot(&self, id: Uuid) -> Option<SessionSnapshot> {
        self.update(id, |_| ()).await?;

        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .map(|entry| SessionSnapshot::new(id, &entry.draft, entry.created_at))
    }

    /// Run `f` against a session's draft under the write lock.
    ///
    /// Returns `None` if the session does not exist or has expired.
    #[instrument(skip(self, f))]
    pub async fn update<F, R>(&self, id: Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&mut RegistrationDraft) -> R,
    {
        let mut sessions = self.sessions.write().await;
        let now = Instant::now();

        if sessions.get(&id)?.expires_at <= now {
            sessions.remove(&id);
            debug!(session_id = %id, "Session expired");
            return None;
        }

        let entry = sessions.get_mut(&id)?;

        // Update expiration on activity
        entry.expires_at = now + self.ttl;

        Some(f(&mut entry.draft))
    }

    /// Discard a session.
    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            debug!(session_id = %id, "Discarded registration session");
        }
        removed
    }

    /// Number of live sessions.
    pub async fn count(&self) -> usize {
        let sessions = self.sessions.read().await;
        let now = Instant::now();
        sessions.values().filter(|e| e.expires_at > now).count()
    }
}

/// Background task that periodically removes expired sessions.
async fn cleanup_loop(sessions: Weak<RwLock<SessionMap>>) {
    loop {
        tokio::time::sleep(CLEANUP_INTERVAL).await;

        let Some(sessions) = sessions.upgrade() else {
            break;
        };

        let now = Instant::now();
        let mut sessions = sessions.write().await;
        let before_count = sessions.len();

        sessions.retain(|_, entry| entry.expires_at > now);

        let removed = before_count - sessions.len();
        if removed > 0 {
            debug!("Cleaned up {} expired sessions", removed);
        }
    }
}
