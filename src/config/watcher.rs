//! Periodic config-file reload.
//!
//! The watcher task sleeps for the configured poll interval, then re-reads and merges
//! the config file through the same update contract used at startup. A bad cycle
//! (unreadable file, parse error, rejected update) is logged and skipped; the loop only
//! exits on the shared end signal.

use crate::config::{Settings, SettingsUpdate};
use log::{debug, warn};
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::watch;

/// Modification-stamp cache so unchanged files are not re-parsed every cycle.
#[derive(Debug, Default)]
struct FileStamp {
    last: Option<SystemTime>,
}

impl FileStamp {
    /// Check whether the file changed since the last call, updating the stamp.
    fn changed(&mut self, path: &Path) -> std::io::Result<bool> {
        let modified = std::fs::metadata(path)?.modified()?;
        if self.last == Some(modified) {
            return Ok(false);
        }
        self.last = Some(modified);
        Ok(true)
    }
}

/// Run the config reload loop until the end signal is set.
///
/// The watch section is re-read from the shared settings every cycle, so a reload can
/// retarget the path, change the poll interval, or disable watching entirely.
pub async fn config_watch_loop(
    settings: Arc<RwLock<Settings>>,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut stamp = FileStamp::default();

    loop {
        let (enabled, path, interval) = {
            let guard = settings.read();
            (
                guard.watch.enable,
                guard.watch.path.clone(),
                guard.watch.interval,
            )
        };

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = shutdown.wait_for(|stop| *stop) => break,
        }

        if !enabled {
            continue;
        }
        let Some(path) = path else {
            continue;
        };

        match stamp.changed(&path) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(err) => {
                warn!("config reload skipped, cannot stat {}: {}", path.display(), err);
                continue;
            }
        }

        match SettingsUpdate::from_path(&path) {
            Ok(update) => {
                let mut guard = settings.write();
                match guard.apply(&update) {
                    Ok(()) => debug!("configuration reloaded from {}", path.display()),
                    Err(err) => warn!("config reload rejected: {}", err),
                }
            }
            Err(err) => warn!("config reload skipped: {}", err),
        }
    }
}
