//! Reset Password Use Case
//!
//! Changes the password of the authenticated principal after checking the
//! old one. Existing tokens stay valid.

use std::sync::Arc;

use kernel::id::UserId;
use platform::password::PasswordPolicyError;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::{AuthError, AuthResult};

/// Reset password input
pub struct ResetPasswordInput {
    pub old_password: String,
    pub new_password: String,
    pub password_confirmation: String,
}

/// Reset password use case
pub struct ResetPasswordUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> ResetPasswordUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, user_id: &UserId, input: ResetPasswordInput) -> AuthResult<()> {
        if input.new_password != input.password_confirmation {
            return Err(AuthError::ConfirmationMismatch);
        }

        let new_password = RawPassword::new(input.new_password).map_err(|e| match e {
            PasswordPolicyError::TooShort { .. } => AuthError::PasswordTooShort,
            PasswordPolicyError::TooLong { max, .. } => AuthError::PasswordTooLong { max },
        })?;

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let old_password = RawPassword::for_verification(input.old_password);
        if !user.password_hash.verify(&old_password, self.config.pepper()) {
            return Err(AuthError::IncorrectPassword);
        }

        let password_hash =
            UserPassword::from_raw(&new_password, self.config.hash_cost(), self.config.pepper())?;
        self.user_repo.update_password(user_id, &password_hash).await?;

        tracing::info!(user_id = %user_id, "Password reset");
        Ok(())
    }
}
