//! rdev-backed pointer device and global input hook.
//!
//! One detached thread runs `rdev::listen` for the life of the process and forwards
//! move/click events into an unbounded channel; the callback does O(1) work and never
//! blocks. Synthetic scrolls and pointer warps go through `rdev::simulate`.

use crate::device::{PointerDevice, PointerEvent};
use crate::error::{Result, RscrollError};
use log::error;
use rdev::{Button, EventType};
use std::thread;
use tokio::sync::mpsc::UnboundedSender;

/// Numeric id for an rdev button: left=1, middle=2, right=3, platform code otherwise.
pub fn button_id(button: Button) -> u32 {
    match button {
        Button::Left => 1,
        Button::Middle => 2,
        Button::Right => 3,
        Button::Unknown(code) => u32::from(code),
    }
}

/// Pointer device backed by `rdev::simulate`.
pub struct RdevPointerDevice;

impl PointerDevice for RdevPointerDevice {
    fn emit_scroll(&self, dx: i32, dy: i32) -> Result<()> {
        rdev::simulate(&EventType::Wheel {
            delta_x: i64::from(dx),
            delta_y: i64::from(dy),
        })
        .map_err(|err| RscrollError::device(format!("wheel injection failed: {err:?}")))
    }

    fn move_to(&self, x: i32, y: i32) -> Result<()> {
        rdev::simulate(&EventType::MouseMove {
            x: f64::from(x),
            y: f64::from(y),
        })
        .map_err(|err| RscrollError::device(format!("pointer warp failed: {err:?}")))
    }
}

/// Spawn the global input hook thread feeding `tx`.
///
/// `rdev::listen` blocks forever and offers no interruption, so the thread is detached;
/// once the receiving side shuts down, sends fail silently and events are dropped.
/// rdev click events carry no coordinates, so the hook remembers the last observed move
/// position and stamps clicks with it.
pub fn spawn_hook_thread(
    tx: UnboundedSender<PointerEvent>,
) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("rscroll-hook".to_string())
        .spawn(move || {
            let mut last_pos = (0i32, 0i32);
            let result = rdev::listen(move |event| {
                let forwarded = match event.event_type {
                    EventType::MouseMove { x, y } => {
                        last_pos = (x as i32, y as i32);
                        Some(PointerEvent::Move {
                            x: last_pos.0,
                            y: last_pos.1,
                        })
                    }
                    EventType::ButtonPress(button) => Some(PointerEvent::Click {
                        x: last_pos.0,
                        y: last_pos.1,
                        button: button_id(button),
                        pressed: true,
                    }),
                    EventType::ButtonRelease(button) => Some(PointerEvent::Click {
                        x: last_pos.0,
                        y: last_pos.1,
                        button: button_id(button),
                        pressed: false,
                    }),
                    _ => None,
                };

                if let Some(event) = forwarded {
                    // A closed channel means the daemon is shutting down.
                    let _ = tx.send(event);
                }
            });

            if let Err(err) = result {
                error!("input hook terminated: {err:?}");
            }
        })
}
