//! Value Objects

use serde::Serialize;
use thiserror::Error;

/// Column width for category and recipe names
pub const NAME_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("name is empty")]
    Empty,
    #[error("name is longer than {max} characters")]
    TooLong { max: usize },
}

/// Non-blank display name, stored trimmed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> Result<Self, NameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }
        if trimmed.chars().count() > NAME_MAX_LENGTH {
            return Err(NameError::TooLong {
                max: NAME_MAX_LENGTH,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(Name::new("  Breakfast ").unwrap().as_str(), "Breakfast");
    }

    #[test]
    fn test_blank_and_long_names_rejected() {
        assert_eq!(Name::new(""), Err(NameError::Empty));
        assert_eq!(Name::new(" \t "), Err(NameError::Empty));
        assert_eq!(
            Name::new(&"x".repeat(NAME_MAX_LENGTH + 1)),
            Err(NameError::TooLong {
                max: NAME_MAX_LENGTH
            })
        );
        assert!(Name::new(&"x".repeat(NAME_MAX_LENGTH)).is_ok());
    }
}
