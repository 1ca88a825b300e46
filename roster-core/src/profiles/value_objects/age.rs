use serde::{Deserialize, Serialize};
use std::fmt;

/// Age in whole years. Always positive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Age(u32);

impl Age {
    /// Create an age; zero is rejected.
    pub fn new(years: u32) -> Result<Self, AgeError> {
        if years == 0 {
            return Err(AgeError::NotPositive);
        }
        Ok(Self(years))
    }

    /// Years as a plain integer.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Age {
    type Error = AgeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Age> for u32 {
    fn from(value: Age) -> Self {
        value.0
    }
}

/// Errors that can occur when creating an age
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgeError {
    /// The age was zero.
    #[error("Age must be a positive number of years")]
    NotPositive,
}
