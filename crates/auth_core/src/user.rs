use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};

use crate::token::{self, TokenError};

/// A registered caller. The public key is stored as-is: no format check
/// and no signature challenge, the key only identifies the wallet that
/// asked for an account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub public_key: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Mint a fresh identifier and stamp the record with the current time.
    pub fn create(public_key: String) -> Result<Self, TokenError> {
        Ok(Self {
            id: token::generate()?,
            public_key,
            created_at: Utc::now(),
        })
    }
}

/// Process-wide user registry. Insert-only; records are never updated or
/// deleted once written.
pub struct UserStore {
    users: RwLock<HashMap<String, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert(&self, user: User) {
        self.users
            .write()
            .expect("user registry lock poisoned")
            .insert(user.id.clone(), user);
    }

    pub fn get(&self, id: &str) -> Option<User> {
        self.users
            .read()
            .expect("user registry lock poisoned")
            .get(id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.users.read().expect("user registry lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
