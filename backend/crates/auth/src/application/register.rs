//! Register Use Case
//!
//! Creates a principal and signs them in.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::authenticator::SessionAuthenticator;
use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::{RevocationStore, UserRepository};
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub user_id: UserId,
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<U, S>
where
    U: UserRepository,
    S: RevocationStore,
{
    user_repo: Arc<U>,
    authenticator: SessionAuthenticator<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> RegisterUseCase<U, S>
where
    U: UserRepository,
    S: RevocationStore,
{
    pub fn new(user_repo: Arc<U>, store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            authenticator: SessionAuthenticator::new(store, config.clone()),
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validate before any hashing
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidInput)?;
        let raw_password = RawPassword::new(input.password).map_err(|_| AuthError::InvalidInput)?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::AlreadyExists);
        }

        let password_hash =
            UserPassword::from_raw(&raw_password, self.config.hash_cost(), self.config.pepper())?;

        let user = User::new(email, password_hash);
        // Still AlreadyExists if a concurrent registration won the race
        self.user_repo.create(&user).await?;

        let token = self.authenticator.issue(&user.user_id);

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(RegisterOutput {
            user_id: user.user_id,
            token,
        })
    }
}
