//! Auth Router

use axum::{Router, middleware, routing::post};

use crate::domain::repository::{RevocationStore, UserRepository};
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_auth;

/// Create the Auth router for any repository implementation
///
/// Mount under `/auth`. Use [`AuthAppState::guard`] on the same state to
/// protect routes elsewhere.
pub fn auth_router<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + RevocationStore + Clone + Send + Sync + 'static,
{
    let guard = state.guard();

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/logout", post(handlers::logout::<R>))
        .route(
            "/reset/password",
            post(handlers::reset_password::<R>)
                .route_layer(middleware::from_fn_with_state(guard, require_auth::<R>)),
        )
        .with_state(state)
}
