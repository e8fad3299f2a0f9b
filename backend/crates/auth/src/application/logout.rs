//! Logout Use Case
//!
//! Revokes the presented token. Only a currently valid token can be
//! revoked; a second logout with the same token reports it as revoked.

use std::sync::Arc;

use crate::application::authenticator::SessionAuthenticator;
use crate::application::config::AuthConfig;
use crate::domain::repository::RevocationStore;
use crate::error::{AuthError, AuthResult};

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: RevocationStore,
{
    authenticator: SessionAuthenticator<S>,
}

impl<S> LogoutUseCase<S>
where
    S: RevocationStore,
{
    pub fn new(store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            authenticator: SessionAuthenticator::new(store, config),
        }
    }

    pub async fn execute(&self, token: Option<&str>) -> AuthResult<()> {
        let Some(token) = token else {
            return Err(AuthError::AuthorizationHeaderMissing);
        };

        let claims = self
            .authenticator
            .evaluate(Some(token))
            .await?
            .require_valid(AuthError::AuthorizationHeaderMissing)?;

        self.authenticator.revoke(token, &claims).await?;

        tracing::info!(user_id = %claims.subject, "User logged out");
        Ok(())
    }
}
