//! Indicator capability resolution.
//!
//! The overlay that marks the scroll anchor is an injected collaborator; this crate
//! ships no GUI toolkit. Disabled means a no-op implementation, enabled requires a
//! backend from the embedding application.

use crate::config::IndicatorSettings;
use crate::device::Indicator;
use crate::error::{Result, RscrollError};
use std::sync::Arc;

/// Indicator used when the overlay is disabled; every call succeeds and does nothing.
pub struct NoopIndicator;

impl Indicator for NoopIndicator {
    fn show(&self, _x: i32, _y: i32) -> Result<()> {
        Ok(())
    }

    fn hide(&self) -> Result<()> {
        Ok(())
    }
}

/// Resolve the indicator capability for the given settings.
///
/// Requesting the indicator without an injected backend is a configuration error
/// surfaced here, at startup, rather than a crash once scrolling begins.
pub fn resolve_indicator(
    settings: &IndicatorSettings,
    backend: Option<Arc<dyn Indicator>>,
) -> Result<Arc<dyn Indicator>> {
    if !settings.enable {
        return Ok(Arc::new(NoopIndicator));
    }

    backend.ok_or_else(|| {
        RscrollError::indicator("the indicator is enabled but no overlay backend is available")
    })
}
