//! Light/dark theme preference.
//!
//! The preference is persisted as the literal string `"light"` or `"dark"`
//! under [`THEME_STORAGE_KEY`]. Reading and writing the store is left to the
//! caller; this module only decides which theme applies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const THEME_STORAGE_KEY: &str = "booking_demo_theme";

/// Class placed on the document root while the light theme is active.
pub const LIGHT_THEME_CLASS: &str = "theme-light";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    /// Picks the startup theme: a stored value wins, then the system
    /// preference, then dark.
    pub fn resolve(stored: Option<&str>, prefers_light: bool) -> Self {
        if let Some(theme) = stored.and_then(|raw| raw.parse().ok()) {
            return theme;
        }
        if prefers_light {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme {other:?}")),
        }
    }
}
