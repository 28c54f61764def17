//! rscroll - Button-Toggled Autoscroll Daemon
//!
//! Entry point: parse one-shot overrides, merge them over the config file and the
//! defaults, wire the platform hook, and run until interrupted.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use rscroll::config::{ButtonUpdate, IndicatorUpdate, ScrollUpdate, SettingsUpdate, WatchUpdate};
use rscroll::device::{resolve_indicator, spawn_hook_thread, RdevPointerDevice};
use rscroll::{Application, Settings};
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (RUST_LOG controls verbosity)
    env_logger::init();

    // Parse command-line arguments
    let matches = Command::new("rscroll")
        .version(rscroll::VERSION)
        .about("A button-toggled autoscroll daemon for Linux")
        .long_about(
            "rscroll turns a mouse button into a scroll toggle: press it, move the \
             pointer, and scroll events are emitted continuously at a velocity matching \
             the displacement from the point where scrolling started.",
        )
        .arg(
            Arg::new("speed")
                .long("speed")
                .value_parser(clap::value_parser!(i32))
                .help("Speed term of the tick-interval formula"),
        )
        .arg(
            Arg::new("dead-area")
                .long("dead-area")
                .value_parser(clap::value_parser!(u32))
                .help("Radius in pixels around the anchor where no scrolling happens"),
        )
        .arg(
            Arg::new("acceleration")
                .long("acceleration")
                .value_parser(clap::value_parser!(i32))
                .help("Acceleration term of the tick-interval formula"),
        )
        .arg(
            Arg::new("no-recenter")
                .long("no-recenter")
                .action(ArgAction::SetTrue)
                .help("Do not warp the pointer back to the anchor after each tick"),
        )
        .arg(
            Arg::new("button-start")
                .long("button-start")
                .value_parser(clap::value_parser!(u32))
                .help("Numeric id of the button that starts scrolling (left=1, middle=2, right=3)"),
        )
        .arg(
            Arg::new("button-end")
                .long("button-end")
                .value_parser(clap::value_parser!(u32))
                .help("Numeric id of the button that stops scrolling (defaults to the start button)"),
        )
        .arg(
            Arg::new("hold")
                .long("hold")
                .action(ArgAction::SetTrue)
                .help("Scroll only while the start button is held down"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Path to the TOML config file"),
        )
        .arg(
            Arg::new("watch")
                .long("watch")
                .action(ArgAction::SetTrue)
                .help("Reload the config file while running"),
        )
        .arg(
            Arg::new("poll-interval")
                .long("poll-interval")
                .value_parser(clap::value_parser!(u64))
                .help("Config reload interval in seconds"),
        )
        .arg(
            Arg::new("icon")
                .long("icon")
                .action(ArgAction::SetTrue)
                .help("Show the anchor indicator (requires an overlay backend)"),
        )
        .arg(
            Arg::new("snapshot")
                .long("snapshot")
                .action(ArgAction::SetTrue)
                .help("Print the initial daemon state as JSON after startup"),
        )
        .get_matches();

    let mut settings = Settings::default();

    // Config file first, then one-shot command-line overrides on top.
    let config_path = matches
        .get_one::<PathBuf>("config")
        .cloned()
        .or_else(|| settings.watch.path.clone());
    if let Some(ref path) = config_path {
        if path.exists() {
            let update = SettingsUpdate::from_path(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            settings
                .apply(&update)
                .context("applying the config file")?;
        }
    }

    let overrides = SettingsUpdate {
        scrolling: ScrollUpdate {
            speed: matches.get_one::<i32>("speed").copied(),
            dead_area: matches.get_one::<u32>("dead-area").copied(),
            acceleration: matches.get_one::<i32>("acceleration").copied(),
            recenter: matches.get_flag("no-recenter").then_some(false),
        },
        buttons: ButtonUpdate {
            start: matches.get_one::<u32>("button-start").copied(),
            end: matches.get_one::<u32>("button-end").copied(),
            hold: matches.get_flag("hold").then_some(true),
        },
        watch: WatchUpdate {
            enable: matches.get_flag("watch").then_some(true),
            path: matches.get_one::<PathBuf>("config").cloned(),
            interval: matches.get_one::<u64>("poll-interval").copied(),
        },
        indicator: IndicatorUpdate {
            enable: matches.get_flag("icon").then_some(true),
            path: None,
            size: None,
        },
    };
    settings
        .apply(&overrides)
        .context("applying command-line overrides")?;

    // Capability errors (an icon with no overlay backend) surface here, before the
    // daemon starts, never as a crash mid-scroll.
    let indicator =
        resolve_indicator(&settings.indicator, None).context("resolving the indicator")?;

    let device = Arc::new(RdevPointerDevice);
    let (event_tx, event_rx) = tokio::sync::mpsc::unbounded_channel();
    // The hook thread stays detached; rdev::listen offers no interruption.
    let _hook = spawn_hook_thread(event_tx).context("spawning the input hook thread")?;

    let mut app = Application::new(settings, device, indicator, event_rx);
    app.start();

    if matches.get_flag("snapshot") {
        println!("{}", serde_json::to_string_pretty(&app.snapshot())?);
    }

    tokio::signal::ctrl_c()
        .await
        .context("waiting for the shutdown signal")?;
    app.stop().await;

    Ok(())
}
