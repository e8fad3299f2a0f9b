//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::entity::{revoked_token::RevokedToken, user::User};
use crate::domain::value_object::{email::Email, user_password::UserPassword};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user; a taken email yields `AuthError::AlreadyExists`
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by exact email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if email is registered
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Overwrite the password hash (single-row update)
    async fn update_password(&self, user_id: &UserId, password_hash: &UserPassword)
    -> AuthResult<()>;
}

/// Durable set of revoked tokens
#[trait_variant::make(RevocationStore: Send)]
pub trait LocalRevocationStore {
    /// Record a revocation; adding the same token twice is a no-op
    async fn add(&self, record: &RevokedToken) -> AuthResult<()>;

    /// Whether the exact token string has been revoked
    async fn contains(&self, token: &str) -> AuthResult<bool>;

    /// Delete records whose token expired at or before `now`
    async fn purge_expired(&self, now: DateTime<Utc>) -> AuthResult<u64>;
}
