//! Login Use Case
//!
//! Verifies email and password, then issues a session token.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::authenticator::SessionAuthenticator;
use crate::application::config::AuthConfig;
use crate::domain::repository::{RevocationStore, UserRepository};
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    pub user_id: UserId,
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<U, S>
where
    U: UserRepository,
    S: RevocationStore,
{
    user_repo: Arc<U>,
    authenticator: SessionAuthenticator<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> LoginUseCase<U, S>
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

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let email = Email::new(input.email).map_err(|_| AuthError::MalformedCredentials)?;
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::MalformedCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::BadCredentials);
        }

        let token = self.authenticator.issue(&user.user_id);

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            user_id: user.user_id,
            token,
        })
    }
}
