use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum profile name length in characters.
pub const MAX_PROFILE_NAME_LEN: usize = 100;

/// Profile name value object with validation
///
/// Represents a validated name that follows the business rules:
/// - 1-100 characters in length
/// - Cannot be empty or only whitespace
/// - No control characters
/// - Stored exactly as given (no trimming or case folding)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProfileName(String);

impl ProfileName {
    /// Create a new profile name with validation
    pub fn new(name: impl Into<String>) -> Result<Self, ProfileNameError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ProfileNameError::Empty);
        }

        if name.chars().count() > MAX_PROFILE_NAME_LEN {
            return Err(ProfileNameError::TooLong);
        }

        if name.chars().any(char::is_control) {
            return Err(ProfileNameError::InvalidCharacters);
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProfileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProfileName {
    type Error = ProfileNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProfileName> for String {
    fn from(value: ProfileName) -> Self {
        value.0
    }
}

/// Errors that can occur when creating a profile name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileNameError {
    /// Empty or whitespace-only input.
    #[error("Profile name cannot be empty")]
    Empty,

    /// More than [`MAX_PROFILE_NAME_LEN`] characters.
    #[error(
        "Profile name too long: maximum {} characters allowed",
        MAX_PROFILE_NAME_LEN
    )]
    TooLong,

    /// Contains a control character.
    #[error("Profile name contains control characters")]
    InvalidCharacters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(ProfileName::new("Alice").is_ok());
        assert!(ProfileName::new("Jean-Luc Picard").is_ok());
        assert!(ProfileName::new("名前").is_ok());
        assert!(ProfileName::new("x".repeat(MAX_PROFILE_NAME_LEN)).is_ok());
    }

    #[test]
    fn invalid_names() {
        assert_eq!(ProfileName::new(""), Err(ProfileNameError::Empty));
        assert_eq!(ProfileName::new("   "), Err(ProfileNameError::Empty));
        assert_eq!(
            ProfileName::new("x".repeat(MAX_PROFILE_NAME_LEN + 1)),
            Err(ProfileNameError::TooLong)
        );
        assert_eq!(
            ProfileName::new("Al\u{0}ice"),
            Err(ProfileNameError::InvalidCharacters)
        );
    }

    #[test]
    fn too_long_message_names_limit() {
        assert_eq!(
            ProfileNameError::TooLong.to_string(),
            format!(
                "Profile name too long: maximum {MAX_PROFILE_NAME_LEN} characters allowed"
            )
        );
    }

    #[test]
    fn stored_verbatim() {
        let name = ProfileName::new(" Alice ").unwrap();
        assert_eq!(name.as_str(), " Alice ");
    }
}
