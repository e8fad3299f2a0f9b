//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system. Display strings are
//! the exact messages clients see.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Shared by registration and login input failures
const INVALID_INPUT_MESSAGE: &str =
    "Missing or wrong email format or password is less than six characters";

/// Shared by unknown email and wrong password
const BAD_CREDENTIALS_MESSAGE: &str = "User does not exist or password is incorrect";

/// Rejection for register/login bodies that are not JSON
pub const CONTENT_TYPE_MESSAGE: &str = "Content-type must be json";

/// Rejection for reset bodies that are not JSON
pub const RESET_CONTENT_TYPE_MESSAGE: &str = "Content type must be json";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration input failed email/password validation
    #[error("{}", INVALID_INPUT_MESSAGE)]
    InvalidInput,

    /// Login input failed email/password validation
    #[error("{}", INVALID_INPUT_MESSAGE)]
    MalformedCredentials,

    /// Email already registered
    #[error("Failed, User already exists, Please sign In")]
    AlreadyExists,

    /// No principal with that email
    #[error("{}", BAD_CREDENTIALS_MESSAGE)]
    UserNotFound,

    /// Password did not verify
    #[error("{}", BAD_CREDENTIALS_MESSAGE)]
    BadCredentials,

    /// Body was not sent as `application/json`
    #[error("{0}")]
    ContentType(&'static str),

    /// Reset body lacks one of its fields
    #[error("Missing required attributes")]
    MissingAttributes,

    /// New password and confirmation differ
    #[error("New password does not match")]
    ConfirmationMismatch,

    /// New password not longer than six characters
    #[error("New password should be greater than six characters long")]
    PasswordTooShort,

    /// New password over the hashing limit
    #[error("New password should be at most {max} characters long")]
    PasswordTooLong { max: usize },

    /// Old password did not verify on reset
    #[error("Incorrect password")]
    IncorrectPassword,

    /// Guarded route called without `Authorization`
    #[error("Token is missing")]
    TokenMissing,

    /// Logout called without `Authorization`
    #[error("Provide an authorization header")]
    AuthorizationHeaderMissing,

    /// `Authorization` present but not `Bearer <token>`
    #[error("Provide a valid auth token")]
    MalformedAuthorizationHeader,

    /// Token failed structure or signature checks
    #[error("Invalid token. Please sign in again")]
    InvalidToken,

    /// Token past its expiry
    #[error("Signature expired, Please sign in again")]
    TokenExpired,

    /// Token found in the revocation store
    #[error("Token was banned, Please login In")]
    TokenRevoked,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidInput
            | AuthError::AlreadyExists
            | AuthError::ContentType(_)
            | AuthError::MissingAttributes
            | AuthError::ConfirmationMismatch
            | AuthError::PasswordTooShort
            | AuthError::PasswordTooLong { .. } => StatusCode::BAD_REQUEST,
            AuthError::MalformedCredentials
            | AuthError::UserNotFound
            | AuthError::BadCredentials
            | AuthError::IncorrectPassword
            | AuthError::TokenMissing
            | AuthError::InvalidToken
            | AuthError::TokenExpired
            | AuthError::TokenRevoked => StatusCode::UNAUTHORIZED,
            AuthError::AuthorizationHeaderMissing | AuthError::MalformedAuthorizationHeader => {
                StatusCode::FORBIDDEN
            }
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidInput
            | AuthError::AlreadyExists
            | AuthError::ContentType(_)
            | AuthError::MissingAttributes
            | AuthError::ConfirmationMismatch
            | AuthError::PasswordTooShort
            | AuthError::PasswordTooLong { .. } => ErrorKind::BadRequest,
            AuthError::MalformedCredentials
            | AuthError::UserNotFound
            | AuthError::BadCredentials
            | AuthError::IncorrectPassword
            | AuthError::TokenMissing
            | AuthError::InvalidToken
            | AuthError::TokenExpired
            | AuthError::TokenRevoked => ErrorKind::Unauthorized,
            AuthError::AuthorizationHeaderMissing | AuthError::MalformedAuthorizationHeader => {
                ErrorKind::Forbidden
            }
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Storage and internal failures never expose their details.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Database(e) => AppError::from_sqlx(e),
            AuthError::Internal(_) => AppError::internal("Internal server error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::UserNotFound | AuthError::BadCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::IncorrectPassword => {
                tracing::warn!("Password reset with wrong old password");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Token failed verification");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_failures_share_message() {
        assert_eq!(
            AuthError::UserNotFound.to_string(),
            AuthError::BadCredentials.to_string()
        );
        assert_eq!(
            AuthError::InvalidInput.to_string(),
            AuthError::MalformedCredentials.to_string()
        );
    }

    #[test]
    fn test_input_status_differs_between_register_and_login() {
        assert_eq!(AuthError::InvalidInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::MalformedCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_header_errors_are_forbidden() {
        assert_eq!(
            AuthError::MalformedAuthorizationHeader.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AuthError::AuthorizationHeaderMissing.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(AuthError::TokenMissing.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_kind_agrees_with_status() {
        let errors = [
            AuthError::InvalidInput,
            AuthError::AlreadyExists,
            AuthError::TokenRevoked,
            AuthError::MalformedAuthorizationHeader,
            AuthError::Internal("boom".into()),
        ];
        for err in errors {
            assert_eq!(err.kind().status_code(), err.status_code().as_u16());
        }
    }

    #[test]
    fn test_internal_details_hidden() {
        let app = AuthError::Internal("secret detail".into()).to_app_error();
        assert_eq!(app.message(), "Internal server error");
        assert!(app.is_server_error());
    }
}
