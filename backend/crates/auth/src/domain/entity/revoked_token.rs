//! Revoked Token Entity
//!
//! A logged-out token. Keyed by the literal token string; `expires_at` is
//! the token's own expiry, after which the record can be swept.

use chrono::{DateTime, Utc};

use crate::domain::token::TokenClaims;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevokedToken {
    pub token: String,
    pub revoked_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl RevokedToken {
    pub fn new(token: impl Into<String>, claims: &TokenClaims) -> Self {
        Self {
            token: token.into(),
            revoked_at: Utc::now(),
            expires_at: claims.expires_at,
        }
    }

    /// True once the token would be rejected as expired anyway
    pub fn is_sweepable(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
