//! Domain Layer
//!
//! Contains entities, value objects, the token codec, and repository traits.

pub mod entity;
pub mod repository;
pub mod session;
pub mod token;
pub mod value_object;

// Re-exports
pub use entity::{revoked_token::RevokedToken, user::User};
pub use repository::{RevocationStore, UserRepository};
pub use session::SessionState;
pub use token::{DecodeError, TokenClaims, TokenCodec};
