//! Bearer Credential Extraction
//!
//! Reads `Authorization: Bearer <token>` from request headers.

use axum::http::{HeaderMap, header};

/// Authorization scheme prefix, including the separating space
pub const BEARER_PREFIX: &str = "Bearer ";

/// What the `Authorization` header carried
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BearerCredential {
    /// No `Authorization` header at all
    Absent,
    /// Header present but not `Bearer <token>` (wrong scheme, no space,
    /// empty or non-ASCII value)
    Malformed,
    /// The token text after the prefix (not yet verified)
    Token(String),
}

/// Extract the bearer token from request headers
pub fn extract_bearer(headers: &HeaderMap) -> BearerCredential {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return BearerCredential::Absent;
    };

    let Ok(value) = value.to_str() else {
        return BearerCredential::Malformed;
    };

    match value.strip_prefix(BEARER_PREFIX).map(str::trim) {
        Some(token) if !token.is_empty() && !token.contains(char::is_whitespace) => {
            BearerCredential::Token(token.to_string())
        }
        _ => BearerCredential::Malformed,
    }
}
