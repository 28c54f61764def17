//! The autoscroll engine: shared motion state, interval computation, and tick emission.
//!
//! The engine sits between the input listener and the scroll ticker. The listener is
//! the only writer of position/direction; the ticker only reads them. The activity flag
//! lives in a `watch` channel so the ticker can block on activation without polling,
//! and the rest of the motion state sits behind a mutex with short critical sections.

pub mod ticker;

use crate::config::settings::{INITIAL_TICK_INTERVAL, MIN_TICK_INTERVAL};
use crate::config::{ScrollSettings, Settings};
use crate::device::PointerDevice;
use crate::tracker::Coordinates;
use log::{debug, warn};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

// Re-export public API
pub use ticker::scroll_loop;

/// Motion state shared between the input listener (writer) and the ticker (reader).
#[derive(Debug)]
struct MotionState {
    position: Coordinates,
    direction: Coordinates,
    interval: Duration,
}

impl MotionState {
    fn new() -> Self {
        Self {
            position: Coordinates::default(),
            direction: Coordinates::default(),
            interval: INITIAL_TICK_INTERVAL,
        }
    }
}

/// Serializable view of the engine state for diagnostics and tests.
#[derive(Debug, Clone, Serialize)]
pub struct EngineSnapshot {
    pub active: bool,
    pub interval_ms: f64,
    pub position: Coordinates,
    pub direction: Coordinates,
}

/// Core autoscroll engine.
///
/// Owns the position and direction trackers, the activity flag, and the per-tick
/// interval; emits scroll steps through the injected [`PointerDevice`].
pub struct ScrollEngine {
    device: Arc<dyn PointerDevice>,
    settings: Arc<RwLock<Settings>>,
    state: Mutex<MotionState>,
    active: watch::Sender<bool>,
}

impl ScrollEngine {
    pub fn new(device: Arc<dyn PointerDevice>, settings: Arc<RwLock<Settings>>) -> Self {
        let (active, _) = watch::channel(false);
        Self {
            device,
            settings,
            state: Mutex::new(MotionState::new()),
            active,
        }
    }

    /// True while a scroll session is in progress.
    pub fn is_active(&self) -> bool {
        *self.active.borrow()
    }

    /// Subscribe to activity transitions. The ticker blocks on this instead of polling.
    pub fn subscribe_active(&self) -> watch::Receiver<bool> {
        self.active.subscribe()
    }

    /// The delay before the next tick.
    pub fn interval(&self) -> Duration {
        self.state.lock().interval
    }

    /// Begin a scroll session anchored at `(x, y)`.
    pub fn start(&self, x: i32, y: i32) {
        {
            let mut state = self.state.lock();
            state.position.anchor(x, y);
            state.direction.reset();
            state.interval = INITIAL_TICK_INTERVAL;
        }
        self.active.send_replace(true);
        debug!("scroll session started at ({x}, {y})");
    }

    /// End the current scroll session, resetting motion to neutral.
    ///
    /// Returns false (and changes nothing) when no session is active, so repeated stop
    /// events are harmless.
    pub fn stop(&self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.active.send_replace(false);
        {
            let mut state = self.state.lock();
            state.position.reset();
            state.direction.reset();
            state.interval = INITIAL_TICK_INTERVAL;
        }
        debug!("scroll session stopped");
        true
    }

    /// Feed a pointer movement sample: track position, and while active recompute the
    /// direction and the tick interval.
    pub fn on_move(&self, x: i32, y: i32) {
        self.update(x, y, true);
    }

    /// Feed the position of a click. Same tracking as [`on_move`](Self::on_move) but
    /// the interval is left alone, so the activating click cannot cause an initial
    /// scroll jump.
    pub fn track_click(&self, x: i32, y: i32) {
        self.update(x, y, false);
    }

    fn update(&self, x: i32, y: i32, refresh_interval: bool) {
        // While idle only the position is remembered; direction, interval, and the
        // settings stay untouched.
        if !self.is_active() {
            self.state.lock().position.set(x, y);
            return;
        }

        let scrolling = self.settings.read().scrolling.clone();
        let mut state = self.state.lock();
        state.position.set(x, y);

        let (dx, dy) = if within_dead_area(&state.position, &scrolling) {
            (0, 0)
        } else {
            state.position.direction()
        };
        state.direction.set(dx, dy);

        if refresh_interval {
            state.interval = compute_interval(state.position.max_distance(), &scrolling);
        }
    }

    /// Perform one tick: emit the current direction as a scroll step and, in recenter
    /// mode, warp the pointer back to the anchor. Device failures are logged, never
    /// propagated into the ticker.
    pub fn emit_tick(&self) {
        let recenter = self.settings.read().scrolling.recenter;
        let (direction, anchor) = {
            let state = self.state.lock();
            (state.direction.current(), state.position.initial())
        };

        if direction != (0, 0) {
            if let Err(err) = self.device.emit_scroll(direction.0, direction.1) {
                warn!("scroll emission failed: {err}");
            }
        }
        if recenter {
            if let Err(err) = self.device.move_to(anchor.0, anchor.1) {
                warn!("pointer recenter failed: {err}");
            }
        }
    }

    /// Serializable view of the current engine state.
    pub fn snapshot(&self) -> EngineSnapshot {
        let state = self.state.lock();
        EngineSnapshot {
            active: self.is_active(),
            interval_ms: state.interval.as_secs_f64() * 1000.0,
            position: state.position,
            direction: state.direction,
        }
    }
}

/// The dead zone only exists in recenter mode: a square of `dead_area` pixels around
/// the anchor where jitter from a near-stationary hand must not scroll.
fn within_dead_area(position: &Coordinates, scrolling: &ScrollSettings) -> bool {
    if !scrolling.recenter {
        return false;
    }
    let (dx, dy) = position.distance(true);
    dx <= scrolling.dead_area as i32 && dy <= scrolling.dead_area as i32
}

/// Tick interval from the acceleration model: `|100 / (acceleration * distance + speed)|`
/// seconds, where `distance` is the largest absolute axis displacement.
///
/// A zero denominator (acceleration and speed both 0, or exact cancellation) falls back
/// to the initial interval instead of dividing; the result is floored so extreme
/// settings cannot produce a zero-duration busy loop.
fn compute_interval(max_distance: i32, scrolling: &ScrollSettings) -> Duration {
    let denominator =
        i64::from(scrolling.acceleration) * i64::from(max_distance) + i64::from(scrolling.speed);
    if denominator == 0 {
        return INITIAL_TICK_INTERVAL;
    }
    let seconds = (100.0 / denominator as f64).abs();
    Duration::from_secs_f64(seconds).max(MIN_TICK_INTERVAL)
}
