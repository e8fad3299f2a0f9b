//! API DTOs (Data Transfer Objects)
//!
//! Request types deliberately do not derive `Debug`: they carry passwords.

use kernel::response::Status;
use serde::{Deserialize, Serialize};

// ============================================================================
// Register / Login
// ============================================================================

/// Register and login request
///
/// Missing fields become empty strings and then fail validation.
#[derive(Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Register and login response
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub status: Status,
    pub message: &'static str,
    pub authentication_token: String,
}

impl TokenResponse {
    pub fn success(message: &'static str, authentication_token: String) -> Self {
        Self {
            status: Status::Success,
            message,
            authentication_token,
        }
    }
}

// ============================================================================
// Reset Password
// ============================================================================

/// Reset password request
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub old_password: Option<String>,
    pub new_password: Option<String>,
    pub password_confirmation: Option<String>,
}
