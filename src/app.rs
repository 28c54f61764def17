//! Application orchestration layer
//!
//! This module wires the shared settings, engine, router, and config watcher together
//! and owns the three long-lived activities (input routing, scroll ticking, config
//! polling). It avoids duplicating state that already lives in individual components.

use crate::config::{config_watch_loop, Settings};
use crate::device::{Indicator, PointerDevice, PointerEvent};
use crate::engine::{scroll_loop, EngineSnapshot, ScrollEngine};
use crate::input::{input_router_loop, InputRouter};
use log::warn;
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Full diagnostic view of the running daemon.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub engine: EngineSnapshot,
    pub settings: Settings,
}

/// Components waiting for [`Application::start`] to move them into their task.
struct Pending {
    events: UnboundedReceiver<PointerEvent>,
    router: InputRouter,
}

/// Application orchestrator - owns the components and the background activities.
pub struct Application {
    engine: Arc<ScrollEngine>,
    settings: Arc<RwLock<Settings>>,
    pending: Option<Pending>,
    shutdown: watch::Sender<bool>,
    tasks: Vec<JoinHandle<()>>,
}

impl Application {
    /// Create the application by wiring components together.
    ///
    /// `events` is the raw event stream produced by the platform hook; `indicator`
    /// must already be resolved (see
    /// [`resolve_indicator`](crate::device::resolve_indicator)) so capability errors
    /// surface before anything runs.
    pub fn new(
        settings: Settings,
        device: Arc<dyn PointerDevice>,
        indicator: Arc<dyn Indicator>,
        events: UnboundedReceiver<PointerEvent>,
    ) -> Self {
        let settings = Arc::new(RwLock::new(settings));
        let engine = Arc::new(ScrollEngine::new(device, Arc::clone(&settings)));
        let router = InputRouter::new(Arc::clone(&engine), indicator, Arc::clone(&settings));
        let (shutdown, _) = watch::channel(false);

        Self {
            engine,
            settings,
            pending: Some(Pending { events, router }),
            shutdown,
            tasks: Vec::new(),
        }
    }

    /// Spawn the router, ticker, and (when watching is enabled) config poller.
    /// Calling start on a running application is a no-op.
    pub fn start(&mut self) {
        let Some(Pending { events, router }) = self.pending.take() else {
            return;
        };

        self.tasks.push(tokio::spawn(input_router_loop(
            events,
            router,
            self.shutdown.subscribe(),
        )));
        self.tasks.push(tokio::spawn(scroll_loop(
            Arc::clone(&self.engine),
            self.shutdown.subscribe(),
        )));
        if self.settings.read().watch.enable {
            self.tasks.push(tokio::spawn(config_watch_loop(
                Arc::clone(&self.settings),
                self.shutdown.subscribe(),
            )));
        }
    }

    /// Set the end signal once and wait for every activity to observe it.
    pub async fn stop(&mut self) {
        let _ = self.shutdown.send(true);
        for task in self.tasks.drain(..) {
            if let Err(err) = task.await {
                warn!("worker task ended abnormally: {err}");
            }
        }
    }

    /// Diagnostic snapshot of all current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            engine: self.engine.snapshot(),
            settings: self.settings.read().clone(),
        }
    }
}
