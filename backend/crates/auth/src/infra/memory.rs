//! In-Memory Repository
//!
//! Satisfies the same repository traits as PostgreSQL. Used by tests and by
//! other crates' router tests.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::{revoked_token::RevokedToken, user::User};
use crate::domain::repository::{RevocationStore, UserRepository};
use crate::domain::value_object::{email::Email, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};

/// Process-local auth repository
#[derive(Clone, Default)]
pub struct MemoryAuthRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    revoked: Arc<RwLock<HashMap<String, RevokedToken>>>,
}

impl MemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored revocation records
    pub async fn revoked_count(&self) -> usize {
        self.revoked.read().await.len()
    }
}

impl UserRepository for MemoryAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(AuthError::AlreadyExists);
        }
        users.insert(user.user_id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.users.read().await.values().any(|u| &u.email == email))
    }

    async fn update_password(
        &self,
        user_id: &UserId,
        password_hash: &UserPassword,
    ) -> AuthResult<()> {
        if let Some(user) = self.users.write().await.get_mut(user_id) {
            user.set_password(password_hash.clone());
        }
        Ok(())
    }
}

impl RevocationStore for MemoryAuthRepository {
    async fn add(&self, record: &RevokedToken) -> AuthResult<()> {
        self.revoked
            .write()
            .await
            .entry(record.token.clone())
            .or_insert_with(|| record.clone());
        Ok(())
    }

    async fn contains(&self, token: &str) -> AuthResult<bool> {
        Ok(self.revoked.read().await.contains_key(token))
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> AuthResult<u64> {
        let mut revoked = self.revoked.write().await;
        let before = revoked.len();
        revoked.retain(|_, record| !record.is_sweepable(now));
        Ok((before - revoked.len()) as u64)
    }
}
