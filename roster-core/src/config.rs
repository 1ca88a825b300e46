//! Configuration for registry seeding and generated profiles.
//!
//! Configuration is TOML:
//!
//! ```toml
//! [generated_age]
//! min = 21
//! max = 60
//!
//! [[roles]]
//! name = "moderator"
//! permissions = ["read", "write"]
//! ```

use std::path::Path;

use roster_model::Permission;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Environment variable naming a TOML configuration file.
pub const CONFIG_PATH_ENV: &str = "ROSTER_CONFIG";
/// Environment override for the lower bound of generated ages.
pub const MIN_AGE_ENV: &str = "ROSTER_MIN_AGE";
/// Environment override for the upper bound of generated ages.
pub const MAX_AGE_ENV: &str = "ROSTER_MAX_AGE";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Roles registered on top of the defaults, in order.
    pub roles: Vec<RoleSeed>,
    /// Age range used when profiles are generated.
    pub generated_age: AgeRange,
}

/// A role to register at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSeed {
    /// Role name; validated on registration.
    pub name: String,
    /// Permissions the role grants. Missing means none.
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

/// Inclusive range expressed as (min, max).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeRange {
    /// Youngest generated age.
    pub min: u32,
    /// Oldest generated age.
    pub max: u32,
}

impl Default for AgeRange {
    fn default() -> Self {
        Self { min: 18, max: 65 }
    }
}

impl AgeRange {
    /// Checked constructor.
    pub fn new(min: u32, max: u32) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// `min` must be at least 1 and no greater than `max`.
    pub fn validate(&self) -> Result<()> {
        if self.min == 0 {
            return Err(RosterError::InvalidConfig(
                "generated_age.min must be at least 1".into(),
            ));
        }
        if self.min > self.max {
            return Err(RosterError::InvalidConfig(format!(
                "generated_age.min ({}) exceeds generated_age.max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl RosterConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: RosterConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    /// Load from the file named by `ROSTER_CONFIG` (or defaults when unset),
    /// then apply per-field environment overrides. Overrides that do not
    /// parse are ignored.
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.is_empty() => Self::from_path(path)?,
            _ => Self::default(),
        };

        if let Ok(raw) = std::env::var(MIN_AGE_ENV)
            && let Ok(min) = raw.trim().parse::<u32>()
        {
            config.generated_age.min = min;
        }

        if let Ok(raw) = std::env::var(MAX_AGE_ENV)
            && let Ok(max) = raw.trim().parse::<u32>()
        {
            config.generated_age.max = max;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        self.generated_age.validate()
    }
}
