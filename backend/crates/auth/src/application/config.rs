//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup and
//! shared read-only behind an `Arc`.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use platform::crypto::random_bytes;
use platform::password::HashCost;
use thiserror::Error;

use crate::domain::token::TokenCodec;

/// Memory cost used outside of tests (OWASP Argon2id baseline)
const DEFAULT_HASH_MEMORY_KIB: u32 = HashCost::OWASP.memory_kib;

/// Memory cost for the testing preset
const TESTING_HASH_MEMORY_KIB: u32 = 1024;

/// Length of generated development secrets
const GENERATED_SECRET_LEN: usize = 32;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown APP_SETTINGS value: {0}")]
    UnknownEnvironment(String),

    #[error("SECRET_KEY is required in production")]
    MissingSecret,

    #[error("SECRET_KEY must not be empty")]
    EmptySecret,

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Deployment profile selected by `APP_SETTINGS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Testing,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "testing" | "test" => Ok(Self::Testing),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC signing secret for session tokens
    pub secret_key: Vec<u8>,
    /// Argon2 time cost
    pub hash_work_factor: u32,
    /// Argon2 memory cost in KiB
    pub hash_memory_kib: u32,
    /// Whole days of token validity
    pub token_validity_days: i64,
    /// Extra seconds of token validity on top of the days
    pub token_validity_seconds: i64,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    fn random_secret() -> Vec<u8> {
        random_bytes(GENERATED_SECRET_LEN)
    }

    /// Fast hashing, one day of validity, random secret
    pub fn development() -> Self {
        Self {
            secret_key: Self::random_secret(),
            hash_work_factor: 1,
            hash_memory_kib: DEFAULT_HASH_MEMORY_KIB,
            token_validity_days: 1,
            token_validity_seconds: 20,
            password_pepper: None,
        }
    }

    /// Cheapest hashing and a three second token window
    pub fn testing() -> Self {
        Self {
            secret_key: Self::random_secret(),
            hash_work_factor: 1,
            hash_memory_kib: TESTING_HASH_MEMORY_KIB,
            token_validity_days: 0,
            token_validity_seconds: 3,
            password_pepper: None,
        }
    }

    /// Production profile; the secret must come from the environment
    pub fn production(secret_key: Vec<u8>) -> Self {
        Self {
            secret_key,
            hash_work_factor: 3,
            hash_memory_kib: DEFAULT_HASH_MEMORY_KIB,
            token_validity_days: 30,
            token_validity_seconds: 20,
            password_pepper: None,
        }
    }

    /// Preset for a profile, without overrides
    pub fn for_environment(
        env: Environment,
        secret_key: Option<Vec<u8>>,
    ) -> Result<Self, ConfigError> {
        let mut config = match env {
            Environment::Development => Self::development(),
            Environment::Testing => Self::testing(),
            Environment::Production => {
                return Ok(Self::production(secret_key.ok_or(ConfigError::MissingSecret)?));
            }
        };
        if let Some(secret) = secret_key {
            config.secret_key = secret;
        }
        Ok(config)
    }

    /// Load from process environment variables
    ///
    /// `APP_SETTINGS` picks the preset; `SECRET_KEY`, `HASH_WORK_FACTOR`,
    /// `HASH_MEMORY_KIB`, `TOKEN_VALIDITY_DAYS`, `TOKEN_VALIDITY_SECONDS` and
    /// `PASSWORD_PEPPER` override it.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = lookup("APP_SETTINGS")
            .map(|v| v.parse::<Environment>())
            .transpose()?
            .unwrap_or_default();

        let secret_key = match lookup("SECRET_KEY") {
            Some(secret) if secret.is_empty() => return Err(ConfigError::EmptySecret),
            Some(secret) => Some(secret.into_bytes()),
            None => None,
        };

        let mut config = Self::for_environment(env, secret_key)?;

        if let Some(v) = parse_var::<u32, _>(&lookup, "HASH_WORK_FACTOR")? {
            config.hash_work_factor = v;
        }
        if let Some(v) = parse_var::<u32, _>(&lookup, "HASH_MEMORY_KIB")? {
            config.hash_memory_kib = v;
        }
        if let Some(v) = parse_var::<i64, _>(&lookup, "TOKEN_VALIDITY_DAYS")? {
            config.token_validity_days = v;
        }
        if let Some(v) = parse_var::<i64, _>(&lookup, "TOKEN_VALIDITY_SECONDS")? {
            config.token_validity_seconds = v;
        }
        if let Some(pepper) = lookup("PASSWORD_PEPPER").filter(|p| !p.is_empty()) {
            config.password_pepper = Some(pepper.into_bytes());
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.secret_key.is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        if self.hash_work_factor == 0 {
            return Err(invalid("HASH_WORK_FACTOR", self.hash_work_factor));
        }
        // Work factor is known good here, so a rejected cost means memory.
        if self.hash_cost().validate().is_err() {
            return Err(invalid("HASH_MEMORY_KIB", self.hash_memory_kib));
        }
        if self.token_validity_days < 0 {
            return Err(invalid("TOKEN_VALIDITY_DAYS", self.token_validity_days));
        }
        if self.token_validity_seconds < 0 {
            return Err(invalid("TOKEN_VALIDITY_SECONDS", self.token_validity_seconds));
        }
        Ok(())
    }

    /// Argon2 cost for this environment
    pub fn hash_cost(&self) -> HashCost {
        HashCost::new(self.hash_work_factor, self.hash_memory_kib)
    }

    /// Token validity window, saturating instead of overflowing
    pub fn token_validity(&self) -> TimeDelta {
        validity_window(self.token_validity_days, self.token_validity_seconds)
    }

    /// Codec keyed with this configuration's secret
    pub fn token_codec(&self) -> TokenCodec<'_> {
        TokenCodec::new(&self.secret_key)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

/// `days * 86400 + seconds`, clamped to what `TimeDelta` can hold
pub fn validity_window(days: i64, seconds: i64) -> TimeDelta {
    let total = days.saturating_mul(86_400).saturating_add(seconds);
    TimeDelta::try_seconds(total).unwrap_or(if total < 0 {
        TimeDelta::MIN
    } else {
        TimeDelta::MAX
    })
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| raw.trim().parse::<T>().map_err(|_| invalid(key, &raw)))
        .transpose()
}

fn invalid(key: &'static str, value: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret_key", &"[REDACTED]")
            .field("hash_work_factor", &self.hash_work_factor)
            .field("hash_memory_kib", &self.hash_memory_kib)
            .field("token_validity_days", &self.token_validity_days)
            .field("token_validity_seconds", &self.token_validity_seconds)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_presets() {
        let dev = AuthConfig::development();
        assert_eq!(dev.hash_work_factor, 1);
        assert_eq!(dev.token_validity(), TimeDelta::seconds(86_400 + 20));

        let test = AuthConfig::testing();
        assert_eq!(test.token_validity(), TimeDelta::seconds(3));

        let prod = AuthConfig::production(b"k".to_vec());
        assert_eq!(prod.hash_work_factor, 3);
        assert_eq!(prod.token_validity(), TimeDelta::seconds(30 * 86_400 + 20));
    }

    #[test]
    fn test_random_secrets_differ() {
        assert_ne!(
            AuthConfig::development().secret_key,
            AuthConfig::development().secret_key
        );
    }

    #[test]
    fn test_from_lookup_defaults_to_development() {
        let config = AuthConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.token_validity_days, 1);
        assert_eq!(config.secret_key.len(), GENERATED_SECRET_LEN);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = AuthConfig::from_lookup(lookup_from(&[
            ("APP_SETTINGS", "testing"),
            ("SECRET_KEY", "s3cret"),
            ("HASH_WORK_FACTOR", "2"),
            ("TOKEN_VALIDITY_DAYS", "0"),
            ("TOKEN_VALIDITY_SECONDS", "0"),
        ]))
        .unwrap();

        assert_eq!(config.secret_key, b"s3cret");
        assert_eq!(config.hash_work_factor, 2);
        assert_eq!(config.hash_memory_kib, TESTING_HASH_MEMORY_KIB);
        assert_eq!(config.token_validity(), TimeDelta::zero());
    }

    #[test]
    fn test_production_requires_secret() {
        let err = AuthConfig::from_lookup(lookup_from(&[("APP_SETTINGS", "production")]));
        assert!(matches!(err, Err(ConfigError::MissingSecret)));

        let ok = AuthConfig::from_lookup(lookup_from(&[
            ("APP_SETTINGS", "Production"),
            ("SECRET_KEY", "prod-secret"),
        ]))
        .unwrap();
        assert_eq!(ok.token_validity_days, 30);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            AuthConfig::from_lookup(lookup_from(&[("APP_SETTINGS", "staging")])),
            Err(ConfigError::UnknownEnvironment(_))
        ));
        assert!(matches!(
            AuthConfig::from_lookup(lookup_from(&[("HASH_WORK_FACTOR", "fast")])),
            Err(ConfigError::InvalidValue { key: "HASH_WORK_FACTOR", .. })
        ));
        assert!(matches!(
            AuthConfig::from_lookup(lookup_from(&[("HASH_WORK_FACTOR", "0")])),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            AuthConfig::from_lookup(lookup_from(&[("HASH_MEMORY_KIB", "1")])),
            Err(ConfigError::InvalidValue { key: "HASH_MEMORY_KIB", .. })
        ));
        assert!(matches!(
            AuthConfig::from_lookup(lookup_from(&[("TOKEN_VALIDITY_SECONDS", "-1")])),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            AuthConfig::from_lookup(lookup_from(&[("SECRET_KEY", "")])),
            Err(ConfigError::EmptySecret)
        ));
    }

    #[test]
    fn test_loaded_cost_can_hash() {
        let config = AuthConfig::from_lookup(lookup_from(&[
            ("APP_SETTINGS", "testing"),
            ("HASH_MEMORY_KIB", "8"),
        ]))
        .unwrap();
        let password = platform::password::ClearTextPassword::new("starwars".to_string()).unwrap();
        assert!(password.hash(config.hash_cost(), None).is_ok());
    }

    #[test]
    fn test_validity_window_saturates() {
        assert_eq!(validity_window(1, 20), TimeDelta::seconds(86_420));
        assert_eq!(validity_window(i64::MAX, 0), TimeDelta::MAX);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let mut config = AuthConfig::production(b"very-secret".to_vec());
        config.password_pepper = Some(b"pepper".to_vec());
        let debug = format!("{:?}", config);
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
