//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, token codec, repository traits
//! - `application/` - Use cases and the session authenticator
//! - `infra/` - PostgreSQL and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router, access guard
//!
//! ## Features
//! - Register/login with email + password, both returning a bearer token
//! - Logout by revoking the presented token
//! - Password reset for the authenticated user
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, cost set per environment
//! - Tokens are HMAC-SHA256 signed and carry their own expiry
//! - Revoked tokens are kept in PostgreSQL until they would have expired

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{AuthConfig, ConfigError};
pub use domain::repository::{RevocationStore, UserRepository};
pub use error::{AuthError, AuthResult};
pub use infra::{memory::MemoryAuthRepository, postgres::PgAuthRepository};
pub use presentation::{
    AuthAppState, AuthMiddlewareState, CurrentUser, auth_router, require_auth,
};
