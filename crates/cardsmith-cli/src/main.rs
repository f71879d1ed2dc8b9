//! Cardsmith CLI
//!
//! Thin wrapper around cardsmith-core for rendering cards without the editor.
//!
//! ## Usage
//!
//! ```bash
//! # Print the front of a card as SVG
//! cardsmith --set student_name="Jane Doe" --set program=BCA svg
//!
//! # Write the back as a 1800x1125 PNG into ./out
//! cardsmith --set student_name="Jane Doe" png --side back --out-dir out
//!
//! # Show the QR payload
//! cardsmith --set student_id=STU-1 payload
//!
//! # Images and colors
//! cardsmith --logo logo.png --photo me.jpg --primary "#0f766e" png
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cardsmith_core::{
    export_side, load_image, render_card, CardDefaults, CardField, CardSerial, CardState,
    ExportGate, ImageSlot, QrPayload, Rasterizer, Side, ThemeColor, ThemePatch,
};
use clap::{Parser, Subcommand};

/// Cardsmith - Identity Card Renderer
#[derive(Parser)]
#[command(name = "cardsmith")]
#[command(version = "0.1.0")]
#[command(about = "Cardsmith - render two-sided identity cards")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Set a card field, e.g. --set student_name="Jane Doe" (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment, global = true)]
    set: Vec<(CardField, String)>,

    /// Institution logo image
    #[arg(long, global = true)]
    logo: Option<PathBuf>,

    /// Principal signature image
    #[arg(long, global = true)]
    signature: Option<PathBuf>,

    /// Student portrait image
    #[arg(long, global = true)]
    photo: Option<PathBuf>,

    /// Primary color (#rrggbb)
    #[arg(long, global = true)]
    primary: Option<String>,

    /// Secondary color (#rrggbb)
    #[arg(long, global = true)]
    secondary: Option<String>,

    /// Label text color (#rrggbb)
    #[arg(long, global = true)]
    label_color: Option<String>,

    /// Value text color (#rrggbb)
    #[arg(long, global = true)]
    value_color: Option<String>,

    /// Card serial (default: random SN-XXXXXX)
    #[arg(long, global = true)]
    serial: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one side as SVG markup
    Svg {
        /// Side to render (front, back)
        #[arg(long, default_value = "front")]
        side: Side,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Export one side as a PNG at 3x scale
    Png {
        /// Side to export (front, back)
        #[arg(long, default_value = "front")]
        side: Side,

        /// Output directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Print the QR payload JSON
    Payload,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Parse a `field=value` assignment
fn parse_assignment(s: &str) -> std::result::Result<(CardField, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("Expected FIELD=VALUE, got '{}'", s))?;
    let field = name.trim().parse::<CardField>().map_err(|e| e.to_string())?;
    Ok((field, value.to_string()))
}

/// Build the card described by the global flags
async fn build_card(cli: &Cli) -> Result<CardState> {
    let defaults = match &cli.serial {
        Some(serial) => CardDefaults::with_serial(CardSerial::new(serial.clone())),
        None => CardDefaults::fresh(),
    };
    let mut card = defaults.build();

    for (field, value) in &cli.set {
        card.set_field(*field, value.clone());
    }

    let images: [(ImageSlot, &Option<PathBuf>); 3] = [
        (ImageSlot::Logo, &cli.logo),
        (ImageSlot::Signature, &cli.signature),
        (ImageSlot::Portrait, &cli.photo),
    ];
    for (slot, path) in images {
        if let Some(path) = path {
            let image = load_image(path)
                .await
                .with_context(|| format!("Cannot use {} image", slot.display_name()))?;
            card.set_image(slot, Some(image));
        }
    }

    let colors: [(ThemeColor, &Option<String>); 4] = [
        (ThemeColor::Primary, &cli.primary),
        (ThemeColor::Secondary, &cli.secondary),
        (ThemeColor::Label, &cli.label_color),
        (ThemeColor::Value, &cli.value_color),
    ];
    for (slot, color) in colors {
        if let Some(color) = color {
            card = card.with_theme(ThemePatch::single(slot, color.clone()));
        }
    }

    tracing::debug!(serial = %card.card_serial, "Card assembled");
    Ok(card)
}

async fn write_svg(card: &CardState, side: Side, out: Option<&Path>) -> Result<()> {
    let svg = render_card(card, side);
    match out {
        Some(path) => {
            tokio::fs::write(path, svg.as_str())
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{}", svg),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let card = build_card(&cli).await?;

    match cli.command {
        Commands::Svg { side, out } => {
            write_svg(&card, side, out.as_deref()).await?;
        }
        Commands::Png { side, out_dir } => {
            let gate = ExportGate::new();
            let rasterizer = tokio::task::spawn_blocking(Rasterizer::shared).await?;
            let path = export_side(&gate, rasterizer, move || card, side, &out_dir).await?;
            println!("Exported {}", path.display());
        }
        Commands::Payload => {
            println!("{}", QrPayload::from_state(&card).to_json()?);
        }
    }

    Ok(())
}
