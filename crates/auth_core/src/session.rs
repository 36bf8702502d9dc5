use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};

use crate::token::{self, TokenError};

/// How long a freshly opened session stays valid.
pub const VALIDITY_WINDOW_HOURS: i64 = 24;

/// A time-limited session tied to a user. `user_id` must name an existing
/// user at creation time; nothing re-checks the reference afterwards, and
/// nothing enforces `expires_at` — expiry is advisory.
#[derive(Debug, Clone)]
pub struct Session {
    pub session_id: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Open a session for `user_id`. The caller looks the user up first;
    /// the record itself keeps no link back to the registry.
    pub fn open(user_id: String) -> Result<Self, TokenError> {
        Ok(Self {
            session_id: token::generate()?,
            user_id,
            expires_at: Utc::now() + Duration::hours(VALIDITY_WINDOW_HOURS),
        })
    }
}

/// Process-wide session registry. Insert-only; sessions are never
/// refreshed and never deleted.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert(&self, session: Session) {
        self.sessions
            .write()
            .expect("session registry lock poisoned")
            .insert(session.session_id.clone(), session);
    }

    pub fn get(&self, session_id: &str) -> Option<Session> {
        self.sessions
            .read()
            .expect("session registry lock poisoned")
            .get(session_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .expect("session registry lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
