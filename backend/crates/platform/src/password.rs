//! Password Hashing and Verification
//!
//! Password handling with:
//! - Argon2id hashing (memory-hard, recommended by OWASP)
//! - A tunable cost ([`HashCost`]) injected per environment, so tests stay fast
//!   while production stays slow
//! - Zeroization of sensitive data
//! - Constant-time comparison
//!
//! ## Security Features
//! - Random 128-bit salt per hash: the same password never hashes to the same digest
//! - Malformed stored digests verify as `false` instead of erroring
//! - Pepper support for additional security layer

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length: passwords must be longer than six characters
pub const MIN_PASSWORD_LENGTH: usize = 7;

/// Maximum password length (bounds the hashing work per request)
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too short
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// The configured cost is outside what Argon2 accepts
    #[error("Invalid hash cost: {0}")]
    InvalidCost(String),

    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Hash Cost
// ============================================================================

/// Argon2id cost parameters
///
/// `work_factor` is the Argon2 time cost (iterations); higher is slower and
/// harder to brute force. `memory_kib` is the memory cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost {
    pub work_factor: u32,
    pub memory_kib: u32,
}

impl HashCost {
    /// OWASP recommended Argon2id parameters: m=19456 (19 MiB), t=2, p=1
    pub const OWASP: Self = Self {
        work_factor: 2,
        memory_kib: 19_456,
    };

    pub const fn new(work_factor: u32, memory_kib: u32) -> Self {
        Self {
            work_factor,
            memory_kib,
        }
    }

    /// Check the cost against Argon2's parameter bounds
    pub fn validate(&self) -> Result<(), PasswordHashError> {
        self.params().map(|_| ())
    }

    fn params(&self) -> Result<Params, PasswordHashError> {
        Params::new(self.memory_kib, self.work_factor, 1, None)
            .map_err(|e| PasswordHashError::InvalidCost(e.to_string()))
    }

    fn argon2(&self) -> Result<Argon2<'static>, PasswordHashError> {
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params()?))
    }
}

impl Default for HashCost {
    fn default() -> Self {
        Self::OWASP
    }
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password with validation
    ///
    /// The length is counted in code points (not bytes) on the input as
    /// typed; the stored value is then NFKC-normalized.
    pub fn new(mut raw: String) -> Result<Self, PasswordPolicyError> {
        let char_count = raw.chars().count();
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        Ok(Self(normalized))
    }

    /// Create without the length policy
    ///
    /// Used for passwords that are only ever *verified* against a stored
    /// hash (e.g., the old password on reset), where a policy failure must
    /// read as a mismatch rather than a validation error.
    pub fn for_verification(raw: String) -> Self {
        Self(raw.nfkc().collect())
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    fn peppered(&self, pepper: Option<&[u8]>) -> Vec<u8> {
        let mut combined = self.as_bytes().to_vec();
        if let Some(p) = pepper {
            combined.extend_from_slice(p);
        }
        combined
    }

    /// Hash the password using Argon2id
    ///
    /// ## Arguments
    /// * `cost` - Argon2 cost parameters for this environment
    /// * `pepper` - Optional application-wide secret for additional security
    ///
    /// ## Returns
    /// PHC-formatted hash string wrapped in `HashedPassword`
    pub fn hash(
        &self,
        cost: HashCost,
        pepper: Option<&[u8]>,
    ) -> Result<HashedPassword, PasswordHashError> {
        let argon2 = cost.argon2()?;
        let mut password_bytes = self.peppered(pepper);

        // Generate random salt (128 bits = 16 bytes)
        let salt = SaltString::generate(OsRng);

        let result = argon2
            .hash_password(&password_bytes, &salt)
            .map(|hash| HashedPassword {
                hash: hash.to_string(),
            })
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()));

        password_bytes.zeroize();
        result
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// The PHC string carries algorithm, version, cost parameters and salt, so a
/// hash produced under one [`HashCost`] still verifies after the configured
/// cost changes.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string, rejecting anything that does not parse
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Wrap a stored digest without parsing it
    ///
    /// A corrupt value is kept as-is and simply never verifies.
    pub fn from_stored(s: impl Into<String>) -> Self {
        Self { hash: s.into() }
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// Returns `false` for a wrong password and for a malformed digest.
    /// Argon2 compares the recomputed output in constant time.
    ///
    /// ## Arguments
    /// * `password` - The clear text password to verify
    /// * `pepper` - Optional pepper (must match the one used during hashing)
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        let mut password_bytes = password.peppered(pepper);

        // Cost parameters come from the PHC string, not from the default
        let verified = Argon2::default()
            .verify_password(&password_bytes, &parsed_hash)
            .is_ok();

        password_bytes.zeroize();
        verified
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
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

    const FAST: HashCost = HashCost::new(1, 1024);

    #[test]
    fn test_password_too_short() {
        let result = ClearTextPassword::new("sixsix".to_string());
        assert!(matches!(
            result,
            Err(PasswordPolicyError::TooShort { min: 7, actual: 6 })
        ));
    }

    #[test]
    fn test_seven_characters_is_enough() {
        assert!(ClearTextPassword::new("starwar".to_string()).is_ok());
        assert!(ClearTextPassword::new("password".to_string()).is_ok());
    }

    #[test]
    fn test_password_too_long() {
        let long_password = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        let result = ClearTextPassword::new(long_password);
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_length_counts_code_points() {
        // 7 code points, 21 bytes
        assert!(ClearTextPassword::new("パスワード安全".to_string()).is_ok());
    }

    #[test]
    fn test_length_counted_before_normalization() {
        // 8 code points that NFKC composes into 4
        let combining = "e\u{301}".repeat(4);
        assert_eq!(combining.chars().count(), 8);
        assert!(ClearTextPassword::new(combining).is_ok());

        // 6 code points still too short even though each is wide
        assert!(matches!(
            ClearTextPassword::new("ﬁﬁﬁﬁﬁﬁ".to_string()),
            Err(PasswordPolicyError::TooShort { actual: 6, .. })
        ));
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("starwars".to_string()).unwrap();
        let hashed = password.hash(FAST, None).unwrap();

        assert!(hashed.verify(&password, None));

        let wrong_password = ClearTextPassword::new("warsdome".to_string()).unwrap();
        assert!(!hashed.verify(&wrong_password, None));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let password = ClearTextPassword::new("starwars".to_string()).unwrap();
        let first = password.hash(FAST, None).unwrap();
        let second = password.hash(FAST, None).unwrap();

        assert_ne!(first.as_phc_string(), second.as_phc_string());
        assert!(first.verify(&password, None));
        assert!(second.verify(&password, None));
    }

    #[test]
    fn test_cost_is_encoded_in_hash() {
        let password = ClearTextPassword::new("starwars".to_string()).unwrap();
        let hashed = password.hash(HashCost::new(3, 2048), None).unwrap();

        assert!(hashed.as_phc_string().contains("m=2048,t=3,p=1"));
        assert!(hashed.verify(&password, None));
    }

    #[test]
    fn test_invalid_cost() {
        let password = ClearTextPassword::new("starwars".to_string()).unwrap();
        let result = password.hash(HashCost::new(0, 1024), None);
        assert!(matches!(result, Err(PasswordHashError::InvalidCost(_))));
    }

    #[test]
    fn test_validate_cost() {
        assert!(HashCost::OWASP.validate().is_ok());
        assert!(FAST.validate().is_ok());
        assert!(matches!(
            HashCost::new(1, 1).validate(),
            Err(PasswordHashError::InvalidCost(_))
        ));
        assert!(HashCost::new(0, 1024).validate().is_err());
    }

    #[test]
    fn test_hash_with_pepper() {
        let password = ClearTextPassword::new("starwars".to_string()).unwrap();
        let pepper = b"my_secret_pepper";
        let hashed = password.hash(FAST, Some(pepper)).unwrap();

        assert!(hashed.verify(&password, Some(pepper)));
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"wrong_pepper")));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = ClearTextPassword::new("starwars".to_string()).unwrap();
        let hashed = password.hash(FAST, None).unwrap();

        let restored = HashedPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&password, None));
    }

    #[test]
    fn test_malformed_digest_never_verifies() {
        assert!(HashedPassword::from_phc_string("not_a_valid_hash").is_err());

        let stored = HashedPassword::from_stored("not_a_valid_hash");
        let password = ClearTextPassword::for_verification("starwars".to_string());
        assert!(!stored.verify(&password, None));
    }

    #[test]
    fn test_for_verification_skips_policy() {
        let short = ClearTextPassword::for_verification("abc".to_string());
        let hashed = ClearTextPassword::new("starwars".to_string())
            .unwrap()
            .hash(FAST, None)
            .unwrap();
        assert!(!hashed.verify(&short, None));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new("secret-value".to_string()).unwrap();
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}
