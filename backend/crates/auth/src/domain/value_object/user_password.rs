//! User Password Value Object
//!
//! Domain value object for user passwords.
//! Delegates to `platform::password` for cryptographic operations.
//!
//! ## Usage
//! ```rust,ignore
//! use auth::domain::value_object::user_password::{UserPassword, RawPassword};
//! use platform::password::HashCost;
//!
//! let raw = RawPassword::new("password123".to_string())?;
//! let hashed = UserPassword::from_raw(&raw, HashCost::default(), None)?;
//! assert!(hashed.verify(&raw, None));
//! ```

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{
    ClearTextPassword, HashCost, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password, enforcing the length policy
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        ClearTextPassword::new(raw).map(Self)
    }

    /// Wrap a password that is only compared against a stored hash
    pub fn for_verification(raw: String) -> Self {
        Self(ClearTextPassword::for_verification(raw))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password for database storage
///
/// Stores password in Argon2id PHC string format.
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password with the configured cost
    pub fn from_raw(raw: &RawPassword, cost: HashCost, pepper: Option<&[u8]>) -> AppResult<Self> {
        let hashed = raw.inner().hash(cost, pepper).map_err(|e| match e {
            PasswordHashError::InvalidCost(msg) => {
                AppError::internal(format!("Invalid password hash cost: {}", msg))
            }
            PasswordHashError::HashingFailed(msg) => {
                AppError::internal(format!("Password hashing failed: {}", msg))
            }
            PasswordHashError::InvalidHashFormat => {
                AppError::internal("Unexpected error during password hashing")
            }
        })?;

        Ok(Self(hashed))
    }

    /// Wrap the stored hash column
    ///
    /// Not validated here: a corrupt digest simply never verifies.
    pub fn from_db(phc_string: impl Into<String>) -> Self {
        Self(HashedPassword::from_stored(phc_string))
    }

    /// Get PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

    const FAST: HashCost = HashCost::new(1, 1024);

    #[test]
    fn test_raw_password_validation() {
        assert!(RawPassword::new("password".to_string()).is_ok());
        assert!(RawPassword::new("a".repeat(MIN_PASSWORD_LENGTH)).is_ok());
        assert!(matches!(
            RawPassword::new("a".repeat(MIN_PASSWORD_LENGTH - 1)),
            Err(PasswordPolicyError::TooShort { .. })
        ));
        assert!(matches!(
            RawPassword::new("a".repeat(MAX_PASSWORD_LENGTH + 1)),
            Err(PasswordPolicyError::TooLong { .. })
        ));
        assert!(RawPassword::new(String::new()).is_err());
    }

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("password".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, FAST, None).unwrap();

        assert!(hashed.verify(&raw, None));
        assert!(hashed.verify(&RawPassword::for_verification("password".into()), None));
        assert!(!hashed.verify(&RawPassword::for_verification("passwort".into()), None));
    }

    #[test]
    fn test_hash_with_pepper() {
        let raw = RawPassword::new("password".to_string()).unwrap();
        let pepper = b"app_secret_pepper";
        let hashed = UserPassword::from_raw(&raw, FAST, Some(pepper)).unwrap();

        assert!(hashed.verify(&raw, Some(pepper)));
        assert!(!hashed.verify(&raw, None));
        assert!(!hashed.verify(&raw, Some(b"wrong")));
    }

    #[test]
    fn test_db_roundtrip_and_corrupt_hash() {
        let raw = RawPassword::new("password".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, FAST, None).unwrap();

        let restored = UserPassword::from_db(hashed.as_phc_string());
        assert!(restored.verify(&raw, None));

        assert!(!UserPassword::from_db("not a phc string").verify(&raw, None));
    }

    #[test]
    fn test_invalid_cost_is_internal_error() {
        let raw = RawPassword::new("password".to_string()).unwrap();
        let err = UserPassword::from_raw(&raw, HashCost::new(0, 1024), None).unwrap_err();
        assert!(err.is_server_error());
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("SecretPassword123!".to_string()).unwrap();
        let debug = format!("{:?}", raw);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Secret"));

        let hashed = UserPassword::from_raw(&raw, FAST, None).unwrap();
        assert!(format!("{:?}", hashed).contains("HASH"));
    }
}
