//! Click tracking and button-role comparisons.

use crate::config::ButtonSettings;
use serde::Serialize;

/// One click as delivered by the platform hook. Transient: recorded for a single
/// routing pass and cleared once the click has been processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonEvent {
    pub button: u32,
    pub pressed: bool,
}

/// Holds the click currently being routed and answers which configured role it plays.
#[derive(Debug, Default)]
pub struct ButtonState {
    last: Option<ButtonEvent>,
}

impl ButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a click for the current routing pass.
    pub fn record(&mut self, button: u32, pressed: bool) {
        self.last = Some(ButtonEvent { button, pressed });
    }

    /// Forget the recorded click. Called at the end of every routing pass so stale
    /// clicks never leak into the next one.
    pub fn clear(&mut self) {
        self.last = None;
    }

    pub fn last_event(&self) -> Option<ButtonEvent> {
        self.last
    }

    /// The recorded click is the configured start button going down.
    pub fn start_pressed(&self, buttons: &ButtonSettings) -> bool {
        matches!(
            self.last,
            Some(ButtonEvent { button, pressed: true }) if button == buttons.start
        )
    }

    /// The recorded click is the configured end button going down.
    pub fn end_pressed(&self, buttons: &ButtonSettings) -> bool {
        matches!(
            self.last,
            Some(ButtonEvent { button, pressed: true }) if button == buttons.effective_end()
        )
    }

    /// Hold mode is on and the recorded click is the start button going up.
    pub fn start_released_with_hold(&self, buttons: &ButtonSettings) -> bool {
        buttons.hold
            && matches!(
                self.last,
                Some(ButtonEvent { button, pressed: false }) if button == buttons.start
            )
    }
}
