//! Session State
//!
//! Outcome of evaluating a presented credential.

use derive_more::Display;
use kernel::id::UserId;

use crate::domain::token::{DecodeError, TokenClaims};
use crate::error::{AuthError, AuthResult};

/// What a credential is worth right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SessionState {
    #[display("valid")]
    Valid(TokenClaims),
    #[display("expired")]
    Expired,
    #[display("invalid")]
    Invalid,
    #[display("revoked")]
    Revoked,
    #[display("missing")]
    Missing,
}

impl SessionState {
    /// The principal, if the session is valid
    pub fn subject(&self) -> Option<UserId> {
        match self {
            SessionState::Valid(claims) => Some(claims.subject),
            _ => None,
        }
    }

    /// Claims of a valid session, or the rejection for this state
    ///
    /// `on_missing` differs between guarded routes and logout.
    pub fn require_valid(self, on_missing: AuthError) -> AuthResult<TokenClaims> {
        match self {
            SessionState::Valid(claims) => Ok(claims),
            SessionState::Expired => Err(AuthError::TokenExpired),
            SessionState::Invalid => Err(AuthError::InvalidToken),
            SessionState::Revoked => Err(AuthError::TokenRevoked),
            SessionState::Missing => Err(on_missing),
        }
    }
}

impl From<DecodeError> for SessionState {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Malformed | DecodeError::SignatureInvalid => SessionState::Invalid,
            DecodeError::Expired => SessionState::Expired,
        }
    }
}
