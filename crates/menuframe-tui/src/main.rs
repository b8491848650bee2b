//! menuframe terminal demo entry point.
//!
//! # Usage
//!
//! ```bash
//! # Vertical menu, logs to a file
//! menuframe-tui --log-file menu.log --log-level debug
//!
//! # Horizontal menu, any bound key releases an action
//! menuframe-tui --layout horizontal --spacing 12 --release-policy any
//! ```

use std::{fs::File, path::PathBuf, sync::Mutex};

use clap::{Parser, ValueEnum};
use menuframe_core::{MenuConfig, ReleasePolicy};
use menuframe_tui::runtime::{Runtime, RuntimeConfig};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LayoutArg {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Released when every bound key is up
    All,
    /// Released by the first bound key going up
    Any,
}

/// Keyboard-driven menu demo
#[derive(Parser, Debug)]
#[command(name = "menuframe-tui")]
#[command(about = "Terminal demo of the menuframe navigation framework")]
#[command(version)]
struct Args {
    /// Direction options are laid out in
    #[arg(long, value_enum, default_value = "vertical")]
    layout: LayoutArg,

    /// Distance between option centers, in cells
    #[arg(long)]
    spacing: Option<f32>,

    /// When an action bound to several keys counts as released
    #[arg(long, value_enum, default_value = "all")]
    release_policy: PolicyArg,

    /// Frames per second
    #[arg(long, default_value = "30")]
    fps: u32,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
            .with(filter)
            .init();
    }

    let menu = match args.layout {
        LayoutArg::Vertical => MenuConfig::vertical(args.spacing.unwrap_or(2.0)),
        LayoutArg::Horizontal => MenuConfig::horizontal(args.spacing.unwrap_or(14.0)),
    };
    let release_policy = match args.release_policy {
        PolicyArg::All => ReleasePolicy::AllKeysUp,
        PolicyArg::Any => ReleasePolicy::AnyKeyUp,
    };

    tracing::info!(layout = ?args.layout, fps = args.fps, "menuframe-tui starting");

    let runtime = Runtime::new(RuntimeConfig { menu, release_policy, fps: args.fps })?;
    Ok(runtime.run()?)
}
