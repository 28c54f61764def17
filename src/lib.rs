//! # rscroll - Button-Toggled Autoscroll Daemon
//!
//! A Linux daemon that turns a mouse button into a scroll toggle: press the configured
//! button, move the pointer, and scroll events are emitted continuously at a velocity
//! matching the displacement from the anchor point.
//!
//! ## Features
//!
//! - **Velocity-modulated scrolling**: tick frequency follows pointer displacement
//!   through a configurable acceleration curve
//! - **Dead zone**: a radius around the anchor where a near-stationary hand cannot
//!   cause jitter scrolling
//! - **Hold or toggle semantics**: scroll while the button is held, or toggle with
//!   distinct start/end buttons
//! - **Live configuration reload**: the TOML config file is re-read while running
//! - **Injected platform seams**: pointer device and indicator are traits, so the core
//!   is testable without a display server
//!
//! ## Architecture
//!
//! The library is organized into focused modules following modern Rust patterns:
//!
//! - [`error`] - Centralized error types and handling
//! - [`tracker`] - Axis/position tracking relative to the scroll anchor
//! - [`config`] - Grouped settings, the partial-update protocol, and live reload
//! - [`device`] - Platform seams: pointer device, raw event hook, indicator
//! - [`engine`] - The autoscroll engine and its tick loop
//! - [`input`] - Button semantics and the raw-event router
//! - [`app`] - Application core and component coordination

// Core modules
pub mod config;
pub mod error;
pub mod tracker;

// Platform seams and the engine built on top of them
pub mod device;
pub mod engine;
pub mod input;

// Core components
pub mod app;

// Re-export commonly used types for convenience
pub use error::{Result, RscrollError};

// Public API surface for external usage
pub use app::{Application, Snapshot};
pub use config::{Settings, SettingsUpdate};
pub use device::{Indicator, PointerDevice, PointerEvent};
pub use engine::ScrollEngine;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
