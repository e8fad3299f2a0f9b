//! HTTP Handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use kernel::response::MessageResponse;
use platform::bearer::{BearerCredential, extract_bearer};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase, ResetPasswordInput,
    ResetPasswordUseCase,
};
use crate::domain::repository::{RevocationStore, UserRepository};
use crate::error::{AuthError, AuthResult, CONTENT_TYPE_MESSAGE, RESET_CONTENT_TYPE_MESSAGE};
use crate::presentation::dto::{CredentialsRequest, ResetPasswordRequest, TokenResponse};
use crate::presentation::middleware::{AuthMiddlewareState, CurrentUser};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + RevocationStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + RevocationStore + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
        }
    }

    /// Guard state sharing this repository and configuration
    pub fn guard(&self) -> AuthMiddlewareState<R> {
        AuthMiddlewareState {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

/// Unwrap a JSON body, telling a wrong content type apart from bad content
fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    content_type_message: &'static str,
    on_invalid: AuthError,
) -> AuthResult<T> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => {
            Err(AuthError::ContentType(content_type_message))
        }
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected request body");
            Err(on_invalid)
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + RevocationStore + Clone + Send + Sync + 'static,
{
    let req = json_body(payload, CONTENT_TYPE_MESSAGE, AuthError::InvalidInput)?;

    let use_case =
        RegisterUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(RegisterInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse::success("Successfully registered", output.token)),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + RevocationStore + Clone + Send + Sync + 'static,
{
    let req = json_body(payload, CONTENT_TYPE_MESSAGE, AuthError::MalformedCredentials)?;

    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(TokenResponse::success(
        "Successfully logged In",
        output.token,
    )))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /auth/logout
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + RevocationStore + Clone + Send + Sync + 'static,
{
    let token = match extract_bearer(&headers) {
        BearerCredential::Absent => None,
        BearerCredential::Malformed => return Err(AuthError::MalformedAuthorizationHeader),
        BearerCredential::Token(token) => Some(token),
    };

    let use_case = LogoutUseCase::new(state.repo.clone(), state.config.clone());
    use_case.execute(token.as_deref()).await?;

    Ok(Json(MessageResponse::success("Successfully logged out")))
}

// ============================================================================
// Reset Password (requires authentication)
// ============================================================================

/// POST /auth/reset/password
pub async fn reset_password<R>(
    State(state): State<AuthAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    payload: Result<Json<ResetPasswordRequest>, JsonRejection>,
) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + RevocationStore + Clone + Send + Sync + 'static,
{
    let req = json_body(
        payload,
        RESET_CONTENT_TYPE_MESSAGE,
        AuthError::MissingAttributes,
    )?;

    let (Some(old_password), Some(new_password), Some(password_confirmation)) =
        (req.old_password, req.new_password, req.password_confirmation)
    else {
        return Err(AuthError::MissingAttributes);
    };

    let use_case = ResetPasswordUseCase::new(state.repo.clone(), state.config.clone());
    use_case
        .execute(
            &current.user_id,
            ResetPasswordInput {
                old_password,
                new_password,
                password_confirmation,
            },
        )
        .await?;

    Ok(Json(MessageResponse::success("Password reset successfully")))
}
