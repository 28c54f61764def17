//! Input subsystem.
//!
//! [`buttons`] holds the transient click record and the start/end/hold comparisons;
//! [`router`] runs the Idle/Scrolling state machine over raw pointer events and drives
//! the engine and indicator.

pub mod buttons;
pub mod router;

// Public re-exports for convenience. Modules outside this crate should prefer importing
// from `crate::input` rather than reaching into submodules.
pub use buttons::{ButtonEvent, ButtonState};
pub use router::{input_router_loop, InputRouter};
