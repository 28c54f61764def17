//! The scroll ticker task.

use crate::engine::ScrollEngine;
use std::sync::Arc;
use tokio::sync::watch;

/// Run the scroll tick loop until the end signal is set.
///
/// One iteration is a tick: block until a session becomes active, sleep the engine's
/// current interval, then emit. Both suspension points abort promptly on shutdown, and
/// a stop that lands mid-sleep suppresses the pending emission.
pub async fn scroll_loop(engine: Arc<ScrollEngine>, mut shutdown: watch::Receiver<bool>) {
    let mut active = engine.subscribe_active();

    loop {
        tokio::select! {
            _ = shutdown.wait_for(|stop| *stop) => break,
            result = active.wait_for(|on| *on) => {
                if result.is_err() {
                    break;
                }
            }
        }

        tokio::select! {
            _ = shutdown.wait_for(|stop| *stop) => break,
            _ = tokio::time::sleep(engine.interval()) => {}
        }

        if engine.is_active() {
            engine.emit_tick();
        }
    }
}
