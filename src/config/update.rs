//! The partial-update record accepted by [`Settings::apply`](crate::config::Settings::apply).
//!
//! Deserialized from TOML, where each section and each field is optional:
//!
//! ```toml
//! [scrolling]
//! speed = 500
//!
//! [buttons]
//! start = 8
//! hold = true
//! ```
//!
//! The CLI layer builds the same record from one-shot flags, so startup overrides and
//! live reloads share a single merge path.

use crate::error::{Result, RscrollError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Partial update for the `[scrolling]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScrollUpdate {
    pub speed: Option<i32>,
    pub dead_area: Option<u32>,
    pub acceleration: Option<i32>,
    pub recenter: Option<bool>,
}

/// Partial update for the `[buttons]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ButtonUpdate {
    pub start: Option<u32>,
    pub end: Option<u32>,
    pub hold: Option<bool>,
}

/// Partial update for the `[watch]` section. `interval` is in whole seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WatchUpdate {
    pub enable: Option<bool>,
    pub path: Option<PathBuf>,
    pub interval: Option<u64>,
}

/// Partial update for the `[indicator]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IndicatorUpdate {
    pub enable: Option<bool>,
    pub path: Option<PathBuf>,
    pub size: Option<u32>,
}

/// A whole partial-update record, grouped by section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SettingsUpdate {
    #[serde(default)]
    pub scrolling: ScrollUpdate,
    #[serde(default)]
    pub buttons: ButtonUpdate,
    #[serde(default)]
    pub watch: WatchUpdate,
    #[serde(default)]
    pub indicator: IndicatorUpdate,
}

impl SettingsUpdate {
    /// Parse an update from TOML text.
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| RscrollError::parse(path, err.to_string()))
    }

    /// Read and parse an update from a config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|err| RscrollError::file_error(format!("reading {}", path.display()), err))?;
        Self::parse(path, &text)
    }

    /// True when no field in any section is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
