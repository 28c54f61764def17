//! Grouped runtime settings and the atomic apply-or-reject update path.

use crate::config::update::SettingsUpdate;
use crate::error::{Result, RscrollError};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Tick interval used before the first move of a session and whenever the interval
/// formula has a zero denominator.
pub const INITIAL_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Floor for computed tick intervals. Keeps the ticker from degenerating into a
/// zero-duration busy loop on extreme settings.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

const DEFAULT_SPEED: i32 = 300;
const DEFAULT_DEAD_AREA: u32 = 50;
const DEFAULT_ACCELERATION: i32 = 10;
const DEFAULT_BUTTON_START: u32 = 2;
const DEFAULT_WATCH_INTERVAL: Duration = Duration::from_secs(5);
const DEFAULT_INDICATOR_SIZE: u32 = 30;

/// Scroll behavior: speed/acceleration feed the tick-interval formula, `dead_area`
/// suppresses jitter around the anchor, `recenter` snaps the pointer back after a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrollSettings {
    pub speed: i32,
    pub dead_area: u32,
    pub acceleration: i32,
    pub recenter: bool,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            dead_area: DEFAULT_DEAD_AREA,
            acceleration: DEFAULT_ACCELERATION,
            recenter: true,
        }
    }
}

/// Which numeric button ids start and end a scroll session.
///
/// `end` of `None` means "mirror the start button": the same button toggles the
/// session off again. An explicit `end` decouples the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonSettings {
    pub start: u32,
    pub end: Option<u32>,
    pub hold: bool,
}

impl ButtonSettings {
    /// The button that stops scrolling, falling back to the start button when unset.
    pub fn effective_end(&self) -> u32 {
        self.end.unwrap_or(self.start)
    }
}

impl Default for ButtonSettings {
    fn default() -> Self {
        Self {
            start: DEFAULT_BUTTON_START,
            end: None,
            hold: false,
        }
    }
}

/// Config-file watching: when enabled, `path` is re-read every `interval`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchSettings {
    pub enable: bool,
    pub path: Option<PathBuf>,
    pub interval: Duration,
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self {
            enable: false,
            path: default_config_path(),
            interval: DEFAULT_WATCH_INTERVAL,
        }
    }
}

/// On-screen indicator capability. The core only carries the knobs; rendering is an
/// injected collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorSettings {
    pub enable: bool,
    pub path: Option<PathBuf>,
    pub size: u32,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            enable: false,
            path: None,
            size: DEFAULT_INDICATOR_SIZE,
        }
    }
}

/// All runtime settings, grouped by section.
///
/// The only mutation path is [`Settings::apply`]: construction arguments, one-shot CLI
/// overrides, and config-file reloads all funnel through the same partial-update record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub scrolling: ScrollSettings,
    pub buttons: ButtonSettings,
    pub watch: WatchSettings,
    pub indicator: IndicatorSettings,
}

impl Settings {
    /// Merge a partial update into these settings.
    ///
    /// Field-wise semantics: every present field replaces the stored one, every absent
    /// field keeps its prior value. The whole record is validated against a candidate
    /// copy first, so a rejected update leaves `self` untouched.
    pub fn apply(&mut self, update: &SettingsUpdate) -> Result<()> {
        let mut candidate = self.clone();

        if let Some(speed) = update.scrolling.speed {
            candidate.scrolling.speed = speed;
        }
        if let Some(dead_area) = update.scrolling.dead_area {
            candidate.scrolling.dead_area = dead_area;
        }
        if let Some(acceleration) = update.scrolling.acceleration {
            candidate.scrolling.acceleration = acceleration;
        }
        if let Some(recenter) = update.scrolling.recenter {
            candidate.scrolling.recenter = recenter;
        }

        if let Some(start) = update.buttons.start {
            candidate.buttons.start = start;
        }
        if let Some(end) = update.buttons.end {
            candidate.buttons.end = Some(end);
        }
        if let Some(hold) = update.buttons.hold {
            candidate.buttons.hold = hold;
        }

        if let Some(enable) = update.watch.enable {
            candidate.watch.enable = enable;
        }
        if let Some(ref path) = update.watch.path {
            candidate.watch.path = Some(path.clone());
        }
        if let Some(interval) = update.watch.interval {
            candidate.watch.interval = Duration::from_secs(interval.max(1));
        }

        if let Some(enable) = update.indicator.enable {
            candidate.indicator.enable = enable;
        }
        if let Some(ref path) = update.indicator.path {
            candidate.indicator.path = Some(path.clone());
        }
        if let Some(size) = update.indicator.size {
            candidate.indicator.size = size;
        }

        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.buttons.start == 0 {
            return Err(RscrollError::config("button id 0 is not a valid start button"));
        }
        if self.buttons.end == Some(0) {
            return Err(RscrollError::config("button id 0 is not a valid end button"));
        }
        if self.watch.enable && self.watch.path.is_none() {
            return Err(RscrollError::config(
                "config watching is enabled but no config path is set",
            ));
        }
        Ok(())
    }
}

/// Default config file location under the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rscroll").join("config.toml"))
}
