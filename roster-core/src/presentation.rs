//! Rendering profiles for people and for other programs.

use crate::error::Result;
use crate::profiles::Profile;

/// Converts a [`Profile`] into an output form.
pub trait ProfilePresenter {
    /// Rendered form.
    type Output;

    /// Render one profile.
    fn present(&self, profile: &Profile) -> Result<Self::Output>;
}

/// JSON suitable for logs or request bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPresenter {
    /// Indent the output.
    pub pretty: bool,
}

impl JsonPresenter {
    /// Single-line JSON.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Indented JSON.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl ProfilePresenter for JsonPresenter {
    type Output = String;

    fn present(&self, profile: &Profile) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(profile)?
        } else {
            serde_json::to_string(profile)?
        };
        Ok(json)
    }
}

/// Single-line summary for console output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPresenter;

impl ProfilePresenter for TextPresenter {
    type Output = String;

    fn present(&self, profile: &Profile) -> Result<String> {
        Ok(format!(
            "{} ({}) role={} permissions={}",
            profile.name(),
            profile.age(),
            profile.role(),
            profile.permissions()
        ))
    }
}
