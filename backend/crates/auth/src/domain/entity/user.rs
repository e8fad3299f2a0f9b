//! User Entity
//!
//! The principal: an account identified by email that owns categories.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, user_password::UserPassword};

/// Bio given to every new account
pub const DEFAULT_BIO: &str = "This is your bio. Describe your culinary prowess or preference.";

/// User entity
///
/// `password_hash` only ever holds an Argon2id digest.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub email: Email,
    pub password_hash: UserPassword,
    pub bio: String,
    pub joined_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with the default bio
    pub fn new(email: Email, password_hash: UserPassword) -> Self {
        Self {
            user_id: UserId::new(),
            email,
            password_hash,
            bio: DEFAULT_BIO.to_string(),
            joined_at: Utc::now(),
        }
    }

    /// Replace the stored password hash
    pub fn set_password(&mut self, password_hash: UserPassword) {
        self.password_hash = password_hash;
    }
}
