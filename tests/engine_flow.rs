//! End-to-end tests driving the real router and ticker tasks over channels, with
//! recording fakes standing in for the platform device and the indicator.

use parking_lot::Mutex;
use rscroll::error::Result;
use rscroll::{Application, Indicator, PointerDevice, PointerEvent, Settings};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;

const TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Default)]
struct RecordingDevice {
    scrolls: Mutex<Vec<(i32, i32)>>,
    warps: Mutex<Vec<(i32, i32)>>,
}

impl PointerDevice for RecordingDevice {
    fn emit_scroll(&self, dx: i32, dy: i32) -> Result<()> {
        self.scrolls.lock().push((dx, dy));
        Ok(())
    }

    fn move_to(&self, x: i32, y: i32) -> Result<()> {
        self.warps.lock().push((x, y));
        Ok(())
    }
}

#[derive(Default)]
struct RecordingIndicator {
    shows: Mutex<Vec<(i32, i32)>>,
    hides: Mutex<u32>,
}

impl Indicator for RecordingIndicator {
    fn show(&self, x: i32, y: i32) -> Result<()> {
        self.shows.lock().push((x, y));
        Ok(())
    }

    fn hide(&self) -> Result<()> {
        *self.hides.lock() += 1;
        Ok(())
    }
}

struct Harness {
    device: Arc<RecordingDevice>,
    indicator: Arc<RecordingIndicator>,
    events: mpsc::UnboundedSender<PointerEvent>,
    app: Application,
}

fn spawn_daemon(settings: Settings) -> Harness {
    let device = Arc::new(RecordingDevice::default());
    let indicator = Arc::new(RecordingIndicator::default());
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let mut app = Application::new(
        settings,
        Arc::clone(&device) as Arc<dyn PointerDevice>,
        Arc::clone(&indicator) as Arc<dyn Indicator>,
        event_rx,
    );
    app.start();

    Harness {
        device,
        indicator,
        events: event_tx,
        app,
    }
}

fn click(x: i32, y: i32, button: u32, pressed: bool) -> PointerEvent {
    PointerEvent::Click {
        x,
        y,
        button,
        pressed,
    }
}

async fn wait_until(harness: &Harness, what: &str, predicate: impl Fn(&Harness) -> bool) {
    timeout(TIMEOUT, async {
        while !predicate(harness) {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    })
    .await
    .unwrap_or_else(|_| panic!("timed out waiting for {what}"));
}

fn back_button_settings() -> Settings {
    let mut settings = Settings::default();
    settings.buttons.start = 8;
    settings
}

#[tokio::test(start_paused = true)]
async fn session_ticks_in_the_moved_direction_until_stopped() {
    let mut harness = spawn_daemon(back_button_settings());

    // Start button press at (50, 50).
    harness.events.send(click(50, 50, 8, true)).unwrap();
    wait_until(&harness, "session start", |h| h.app.snapshot().engine.active).await;
    assert_eq!(*harness.indicator.shows.lock(), vec![(50, 50)]);

    // Move 100px down: outside the 50px dead area, scrolling up in sign convention.
    harness.events.send(PointerEvent::Move { x: 50, y: 150 }).unwrap();
    wait_until(&harness, "direction update", |h| {
        h.app.snapshot().engine.direction.current() == (0, -1)
    })
    .await;

    // With acceleration 10, speed 300, and distance 100 the interval is
    // 100 / (10 * 100 + 300) seconds.
    let interval_ms = harness.app.snapshot().engine.interval_ms;
    assert!((interval_ms - 1000.0 * 100.0 / 1300.0).abs() < 0.1);

    // Let the ticker run: every emitted delta is exactly one unit per axis.
    tokio::time::sleep(Duration::from_millis(500)).await;
    let scrolls = harness.device.scrolls.lock().clone();
    assert!(scrolls.len() >= 3, "expected ticks, got {scrolls:?}");
    assert!(scrolls.iter().all(|&delta| delta == (0, -1)));

    // Recenter mode warps the pointer back to the anchor after each tick.
    assert!(harness.device.warps.lock().iter().all(|&warp| warp == (50, 50)));

    // Pressing the start button again ends the toggle session.
    harness.events.send(click(50, 150, 8, true)).unwrap();
    wait_until(&harness, "session stop", |h| !h.app.snapshot().engine.active).await;
    assert_eq!(*harness.indicator.hides.lock(), 1);

    // No further ticks once stopped.
    let settled = harness.device.scrolls.lock().len();
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(harness.device.scrolls.lock().len(), settled);

    timeout(TIMEOUT, harness.app.stop()).await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn idle_moves_never_scroll() {
    let mut harness = spawn_daemon(back_button_settings());

    for step in 0..20 {
        harness
            .events
            .send(PointerEvent::Move {
                x: step * 13,
                y: step * 7,
            })
            .unwrap();
    }
    wait_until(&harness, "position tracking", |h| {
        h.app.snapshot().engine.position.current() == (19 * 13, 19 * 7)
    })
    .await;

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(harness.device.scrolls.lock().is_empty());
    assert!(harness.device.warps.lock().is_empty());
    assert!(!harness.app.snapshot().engine.active);

    timeout(TIMEOUT, harness.app.stop()).await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn hold_mode_scrolls_only_while_pressed() {
    let mut settings = back_button_settings();
    settings.buttons.hold = true;
    let mut harness = spawn_daemon(settings);

    harness.events.send(click(100, 100, 8, true)).unwrap();
    wait_until(&harness, "session start", |h| h.app.snapshot().engine.active).await;

    harness.events.send(PointerEvent::Move { x: 100, y: 20 }).unwrap();
    wait_until(&harness, "first tick", |h| !h.device.scrolls.lock().is_empty()).await;
    assert!(harness
        .device
        .scrolls
        .lock()
        .iter()
        .all(|&delta| delta == (0, 1)));

    // Releasing the start button ends a hold-mode session.
    harness.events.send(click(100, 20, 8, false)).unwrap();
    wait_until(&harness, "session stop", |h| !h.app.snapshot().engine.active).await;
    assert_eq!(*harness.indicator.hides.lock(), 1);

    // A stray release while idle neither errors nor hides again.
    harness.events.send(click(100, 20, 8, false)).unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(*harness.indicator.hides.lock(), 1);

    timeout(TIMEOUT, harness.app.stop()).await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn dead_zone_pauses_scrolling_without_ending_the_session() {
    let mut harness = spawn_daemon(back_button_settings());

    harness.events.send(click(100, 100, 8, true)).unwrap();
    wait_until(&harness, "session start", |h| h.app.snapshot().engine.active).await;

    // Inside the default 50px dead area: direction collapses to neutral.
    harness.events.send(PointerEvent::Move { x: 120, y: 120 }).unwrap();
    wait_until(&harness, "dead-zone direction", |h| {
        let engine = h.app.snapshot().engine;
        engine.position.current() == (120, 120) && engine.direction.current() == (0, 0)
    })
    .await;

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(harness.device.scrolls.lock().is_empty());
    assert!(harness.app.snapshot().engine.active);

    // Leaving the dead zone resumes scrolling within the same session.
    harness.events.send(PointerEvent::Move { x: 220, y: 100 }).unwrap();
    wait_until(&harness, "resumed ticks", |h| !h.device.scrolls.lock().is_empty()).await;
    assert!(harness
        .device
        .scrolls
        .lock()
        .iter()
        .all(|&delta| delta == (-1, 0)));

    timeout(TIMEOUT, harness.app.stop()).await.unwrap();
}
