//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the access guard.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{AccessGuard, AuthMiddlewareState, CurrentUser, require_auth};
pub use router::auth_router;
