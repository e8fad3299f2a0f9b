//! Session Authenticator
//!
//! Combines the token codec with the revocation store to decide what a
//! presented credential is worth.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::domain::entity::revoked_token::RevokedToken;
use crate::domain::repository::RevocationStore;
use crate::domain::session::SessionState;
use crate::domain::token::TokenClaims;
use crate::error::AuthResult;

/// Issues, evaluates and revokes session tokens
pub struct SessionAuthenticator<S>
where
    S: RevocationStore,
{
    store: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> SessionAuthenticator<S>
where
    S: RevocationStore,
{
    pub fn new(store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self { store, config }
    }

    /// Sign a fresh token for `subject`
    pub fn issue(&self, subject: &UserId) -> String {
        self.issue_at(subject, Utc::now())
    }

    pub fn issue_at(&self, subject: &UserId, issued_at: DateTime<Utc>) -> String {
        self.config.token_codec().encode(
            subject,
            issued_at,
            self.config.token_validity_days,
            self.config.token_validity_seconds,
        )
    }

    /// Evaluate against the current time
    pub async fn evaluate(&self, token: Option<&str>) -> AuthResult<SessionState> {
        self.evaluate_at(token, Utc::now()).await
    }

    /// Missing, then Invalid, then Expired, then Revoked, else Valid
    ///
    /// Only storage faults are returned as errors.
    pub async fn evaluate_at(
        &self,
        token: Option<&str>,
        now: DateTime<Utc>,
    ) -> AuthResult<SessionState> {
        let Some(token) = token else {
            return Ok(SessionState::Missing);
        };

        let claims = match self.config.token_codec().decode_at(token, now) {
            Ok(claims) => claims,
            Err(err) => return Ok(err.into()),
        };

        if self.store.contains(token).await? {
            return Ok(SessionState::Revoked);
        }

        Ok(SessionState::Valid(claims))
    }

    /// Add a token to the revocation store
    pub async fn revoke(&self, token: &str, claims: &TokenClaims) -> AuthResult<()> {
        self.store.add(&RevokedToken::new(token, claims)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::MemoryAuthRepository;
    use chrono::TimeDelta;

    fn authenticator(config: AuthConfig) -> (SessionAuthenticator<MemoryAuthRepository>, Arc<MemoryAuthRepository>) {
        let store = Arc::new(MemoryAuthRepository::new());
        (
            SessionAuthenticator::new(store.clone(), Arc::new(config)),
            store,
        )
    }

    #[tokio::test]
    async fn test_fresh_token_is_valid() {
        let (auth, _) = authenticator(AuthConfig::testing());
        let subject = UserId::new();
        let token = auth.issue(&subject);

        let state = auth.evaluate(Some(&token)).await.unwrap();
        assert_eq!(state.subject(), Some(subject));
    }

    #[tokio::test]
    async fn test_missing_and_invalid() {
        let (auth, _) = authenticator(AuthConfig::testing());
        assert_eq!(auth.evaluate(None).await.unwrap(), SessionState::Missing);
        assert_eq!(
            auth.evaluate(Some("garbage")).await.unwrap(),
            SessionState::Invalid
        );
    }

    #[tokio::test]
    async fn test_expired() {
        let (auth, _) = authenticator(AuthConfig::testing());
        let issued = Utc::now();
        let token = auth.issue_at(&UserId::new(), issued);

        let later = issued + TimeDelta::seconds(3);
        assert_eq!(
            auth.evaluate_at(Some(&token), later).await.unwrap(),
            SessionState::Expired
        );
    }

    #[tokio::test]
    async fn test_revoked_after_revoke() {
        let (auth, store) = authenticator(AuthConfig::testing());
        let token = auth.issue(&UserId::new());

        let SessionState::Valid(claims) = auth.evaluate(Some(&token)).await.unwrap() else {
            panic!("fresh token should be valid");
        };
        auth.revoke(&token, &claims).await.unwrap();
        auth.revoke(&token, &claims).await.unwrap();

        assert_eq!(
            auth.evaluate(Some(&token)).await.unwrap(),
            SessionState::Revoked
        );
        assert_eq!(store.revoked_count().await, 1);
    }

    #[tokio::test]
    async fn test_expired_wins_over_revoked() {
        let (auth, _) = authenticator(AuthConfig::testing());
        let issued = Utc::now();
        let token = auth.issue_at(&UserId::new(), issued);
        let claims = auth.config.token_codec().decode_at(&token, issued).unwrap();
        auth.revoke(&token, &claims).await.unwrap();

        assert_eq!(
            auth.evaluate_at(Some(&token), claims.expires_at).await.unwrap(),
            SessionState::Expired
        );
    }
}
