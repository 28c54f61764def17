//! Routing of raw pointer events into engine transitions.
//!
//! Two states, Idle and Scrolling, transitioning on click events only; moves never
//! change state, only direction and interval. Each routed event is O(1) state mutation
//! so the listener side never blocks.

use crate::config::Settings;
use crate::device::{Indicator, PointerEvent};
use crate::engine::ScrollEngine;
use crate::input::buttons::ButtonState;
use log::warn;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::watch;

/// Decides start/stop transitions from clicks and forwards movement into the engine.
pub struct InputRouter {
    engine: Arc<ScrollEngine>,
    indicator: Arc<dyn Indicator>,
    settings: Arc<RwLock<Settings>>,
    buttons: ButtonState,
}

impl InputRouter {
    pub fn new(
        engine: Arc<ScrollEngine>,
        indicator: Arc<dyn Indicator>,
        settings: Arc<RwLock<Settings>>,
    ) -> Self {
        Self {
            engine,
            indicator,
            settings,
            buttons: ButtonState::new(),
        }
    }

    /// Route one raw event.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Move { x, y } => self.engine.on_move(x, y),
            PointerEvent::Click {
                x,
                y,
                button,
                pressed,
            } => self.on_click(x, y, button, pressed),
        }
    }

    fn on_click(&mut self, x: i32, y: i32, button: u32, pressed: bool) {
        let buttons = self.settings.read().buttons.clone();
        self.buttons.record(button, pressed);

        if !self.engine.is_active() && self.buttons.start_pressed(&buttons) {
            self.engine.start(x, y);
            if let Err(err) = self.indicator.show(x, y) {
                warn!("indicator show failed: {err}");
            }
        } else if self.engine.is_active()
            && (self.buttons.end_pressed(&buttons)
                || self.buttons.start_released_with_hold(&buttons))
        {
            if self.engine.stop() {
                if let Err(err) = self.indicator.hide() {
                    warn!("indicator hide failed: {err}");
                }
            }
        }

        // Tracking runs after the transition decision so the activating click cannot
        // cause an initial scroll jump.
        self.engine.track_click(x, y);
        self.buttons.clear();
    }
}

/// Drain raw pointer events until the end signal is set or the hook channel closes.
pub async fn input_router_loop(
    mut events: UnboundedReceiver<PointerEvent>,
    mut router: InputRouter,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        tokio::select! {
            _ = shutdown.wait_for(|stop| *stop) => break,
            event = events.recv() => {
                match event {
                    Some(event) => router.handle_event(event),
                    None => break,
                }
            }
        }
    }
}
