#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use cardsmith_core::{CardDefaults, CardSerial};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Export directory, set from command line
static EXPORT_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Session defaults (fixed serial for the whole process)
static DEFAULTS: OnceLock<CardDefaults> = OnceLock::new();

/// Get the export directory (set from command line or default)
pub fn get_export_dir() -> PathBuf {
    EXPORT_DIR.get().cloned().unwrap_or_else(default_export_dir)
}

fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Defaults drawn once at startup and reused by every reset
pub fn get_defaults() -> CardDefaults {
    DEFAULTS.get_or_init(CardDefaults::fresh).clone()
}

/// Cardsmith - Identity Card Editor
#[derive(Parser, Debug)]
#[command(name = "cardsmith-desktop")]
#[command(about = "Cardsmith - design, preview and export two-sided ID cards")]
struct Args {
    /// Directory exported PNGs are written to (default: Downloads)
    #[arg(short, long)]
    export_dir: Option<PathBuf>,

    /// Use a fixed card serial instead of a random SN-XXXXXX
    #[arg(short, long)]
    serial: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let export_dir = args.export_dir.unwrap_or_else(default_export_dir);
    let _ = EXPORT_DIR.set(export_dir.clone());

    let defaults = match args.serial {
        Some(serial) => CardDefaults::with_serial(CardSerial::new(serial)),
        None => CardDefaults::fresh(),
    };
    tracing::info!(
        "Starting with serial {} and export dir: {:?}",
        defaults.serial(),
        export_dir
    );
    let _ = DEFAULTS.set(defaults);

    // Editor column plus a 600px card preview
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Cardsmith")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1360.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
