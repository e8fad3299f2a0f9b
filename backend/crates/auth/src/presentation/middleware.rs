//! Access Guard
//!
//! Protects routes with a bearer token. On success the resolved principal is
//! stored in request extensions as [`CurrentUser`].

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::bearer::{BearerCredential, extract_bearer};

use crate::application::authenticator::SessionAuthenticator;
use crate::application::config::AuthConfig;
use crate::domain::repository::RevocationStore;
use crate::error::{AuthError, AuthResult};

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: RevocationStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Principal resolved by the guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
}

/// Resolves the `Authorization` header to a principal
pub struct AccessGuard<S>
where
    S: RevocationStore,
{
    authenticator: SessionAuthenticator<S>,
}

impl<S> AccessGuard<S>
where
    S: RevocationStore,
{
    pub fn new(store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            authenticator: SessionAuthenticator::new(store, config),
        }
    }

    pub async fn authorize(&self, headers: &HeaderMap) -> AuthResult<CurrentUser> {
        let token = match extract_bearer(headers) {
            BearerCredential::Absent => return Err(AuthError::TokenMissing),
            BearerCredential::Malformed => return Err(AuthError::MalformedAuthorizationHeader),
            BearerCredential::Token(token) => token,
        };

        let claims = self
            .authenticator
            .evaluate(Some(&token))
            .await?
            .require_valid(AuthError::TokenMissing)?;

        Ok(CurrentUser {
            user_id: claims.subject,
            expires_at: claims.expires_at,
        })
    }
}

/// Middleware that requires a valid, unrevoked token
pub async fn require_auth<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    R: RevocationStore + Clone + Send + Sync + 'static,
{
    let guard = AccessGuard::new(state.repo.clone(), state.config.clone());
    let current = guard.authorize(req.headers()).await?;

    req.extensions_mut().insert(current);
    Ok(next.run(req).await)
}
