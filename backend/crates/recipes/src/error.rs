//! Recipe Error Types
//!
//! Recipe-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Recipe-specific result type alias
pub type RecipeResult<T> = Result<T, RecipeError>;

/// Rejection for bodies that are not JSON
pub const CONTENT_TYPE_MESSAGE: &str = "Content-type must be json";

/// Recipe-specific error variants
#[derive(Debug, Error)]
pub enum RecipeError {
    /// No such category for this user
    #[error("Category not found")]
    CategoryNotFound,

    /// No such recipe in this category
    #[error("Recipe not found")]
    RecipeNotFound,

    /// Category name missing or blank
    #[error("Missing or invalid category name")]
    InvalidCategoryName,

    /// Recipe name missing or blank
    #[error("Missing or invalid recipe name")]
    InvalidRecipeName,

    /// Body was not sent as `application/json`
    #[error("{}", CONTENT_TYPE_MESSAGE)]
    ContentType,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RecipeError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RecipeError::CategoryNotFound | RecipeError::RecipeNotFound => StatusCode::NOT_FOUND,
            RecipeError::InvalidCategoryName
            | RecipeError::InvalidRecipeName
            | RecipeError::ContentType => StatusCode::BAD_REQUEST,
            RecipeError::Database(_) | RecipeError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RecipeError::CategoryNotFound | RecipeError::RecipeNotFound => ErrorKind::NotFound,
            RecipeError::InvalidCategoryName
            | RecipeError::InvalidRecipeName
            | RecipeError::ContentType => ErrorKind::BadRequest,
            RecipeError::Database(_) | RecipeError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            RecipeError::Database(e) => AppError::from_sqlx(e),
            RecipeError::Internal(_) => AppError::internal("Internal server error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            RecipeError::Database(e) => {
                tracing::error!(error = %e, "Recipe database error");
            }
            RecipeError::Internal(msg) => {
                tracing::error!(message = %msg, "Recipe internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Recipe error");
            }
        }
    }
}

impl IntoResponse for RecipeError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(RecipeError::CategoryNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            RecipeError::InvalidRecipeName.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RecipeError::ContentType.to_app_error().message(),
            "Content-type must be json"
        );
    }

    #[test]
    fn test_database_details_hidden() {
        let app = RecipeError::Database(sqlx::Error::PoolTimedOut).to_app_error();
        assert!(!app.message().contains("pool timed out"));
        assert_eq!(app.kind(), ErrorKind::ServiceUnavailable);
    }
}
