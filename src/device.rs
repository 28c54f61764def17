//! Platform pointer-device seam.
//!
//! The engine and router never touch platform input APIs directly: they emit through
//! the [`PointerDevice`] trait, signal the overlay through [`Indicator`], and consume
//! [`PointerEvent`]s from a channel. The rdev-backed implementations live in
//! [`rdev_backend`]; tests substitute recording fakes.

pub mod indicator;
pub mod rdev_backend;

use crate::error::Result;

/// Raw pointer events delivered by the platform hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Move {
        x: i32,
        y: i32,
    },
    Click {
        x: i32,
        y: i32,
        button: u32,
        pressed: bool,
    },
}

/// Synthetic-event injection capability.
pub trait PointerDevice: Send + Sync {
    /// Emit one scroll step. Each axis carries -1, 0, or +1 units.
    fn emit_scroll(&self, dx: i32, dy: i32) -> Result<()>;

    /// Warp the pointer to an absolute screen position.
    fn move_to(&self, x: i32, y: i32) -> Result<()>;
}

/// On-screen indicator shown at the scroll anchor while a session is active.
pub trait Indicator: Send + Sync {
    fn show(&self, x: i32, y: i32) -> Result<()>;
    fn hide(&self) -> Result<()>;
}

// Re-export public API
pub use indicator::{resolve_indicator, NoopIndicator};
pub use rdev_backend::{spawn_hook_thread, RdevPointerDevice};
