use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use padmosaic::error::MosaicError;
use padmosaic::models::{Grid, MosaicConfig};
use padmosaic::services::{
    LogPlayer, MappingStore, MosaicService, PadSession, PathDialog, StdinDevice,
    MAPPINGS_FILE_NAME,
};

const MOSAIC_USAGE: &str =
    "Usage: padmosaic mosaic <IMAGE> [--output <FILE>] [--size <N>] [--scale <N>]";

#[derive(Parser)]
#[command(name = "padmosaic")]
#[command(about = "MIDI pad clip mapper and palette mosaic quantizer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Quantize an image to a palette mosaic and write a preview PNG
    Mosaic {
        /// Source image (PNG, JPEG, GIF, BMP or WebP)
        image: PathBuf,

        /// Preview PNG path (default: export.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Grid side length in cells (default: 8)
        #[arg(long)]
        size: Option<usize>,

        /// Preview pixels per cell (default: 32)
        #[arg(long)]
        scale: Option<usize>,
    },
    /// Show, edit and trigger pad mappings
    Pads {
        /// Mapping file (default: $MAPPINGS_FILE or tileMappings.json)
        #[arg(short, long, global = true)]
        mappings: Option<PathBuf>,

        #[command(subcommand)]
        command: PadCommands,
    },
}

#[derive(Subcommand)]
enum PadCommands {
    /// Print the pad grid, marking pads that have a clip
    Grid,
    /// Embed an audio file as the clip for a pad
    Assign {
        /// Pad note number (36-100)
        #[arg(short, long)]
        pad: u8,

        /// Audio file to embed
        #[arg(short, long)]
        clip: PathBuf,
    },
    /// Remove the clip from a pad
    Clear {
        /// Pad note number (36-100)
        #[arg(short, long)]
        pad: u8,
    },
    /// Trigger clips from incoming MIDI messages
    Listen {
        /// Input device id
        #[arg(short, long, default_value = StdinDevice::ID)]
        device: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Mosaic {
            image,
            output,
            size,
            scale,
        }) => run_mosaic_command(image, output, size, scale),
        Some(Commands::Pads { mappings, command }) => run_pads_command(mappings, command).await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Log to stderr so stdout only carries command output
fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn mappings_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var("MAPPINGS_FILE").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(MAPPINGS_FILE_NAME))
}

/// Quantize an image, print its labels and write the preview
fn run_mosaic_command(
    image: PathBuf,
    output: Option<PathBuf>,
    size: Option<usize>,
    scale: Option<usize>,
) -> anyhow::Result<()> {
    init_tracing("padmosaic=warn");

    let mut config = MosaicConfig::from_env();
    if let Some(output) = output {
        config.output = output;
    }
    if let Some(size) = size {
        config.size = size;
    }
    if let Some(scale) = scale {
        config.scale = scale;
    }

    let service = MosaicService::new(config).context("Invalid mosaic configuration")?;
    match service.run(&image) {
        Ok(report) => {
            println!("{}", report.labels);
            println!("Saved {} (preview).", report.output.display());
            Ok(())
        }
        Err(e @ (MosaicError::SourceMissing(_) | MosaicError::Decode(_))) => {
            eprintln!("{e}");
            eprintln!("{MOSAIC_USAGE}");
            std::process::exit(1);
        }
        Err(e) => Err(e).context("Mosaic failed"),
    }
}

/// Run a pad subcommand against the mapping file
async fn run_pads_command(mappings: Option<PathBuf>, command: PadCommands) -> anyhow::Result<()> {
    let default_filter = match command {
        PadCommands::Listen { .. } => "padmosaic=info",
        _ => "padmosaic=warn",
    };
    init_tracing(default_filter);

    let mappings = mappings_path(mappings);
    let mut dialog = PathDialog::new(&mappings);
    if let PadCommands::Assign { clip, .. } = &command {
        dialog = dialog.with_audio(clip);
    }

    let mut session = PadSession::new(
        Arc::new(StdinDevice::new()),
        Box::new(dialog),
        Box::new(LogPlayer::new()),
    );
    session
        .load_mappings()
        .with_context(|| format!("Failed to load {}", mappings.display()))?;

    match command {
        PadCommands::Grid => {
            print!("{}", Grid::render(session.store()));
            println!("{} of 64 pads mapped", session.store().len());
        }
        PadCommands::Assign { pad, clip } => {
            session
                .click_pad(pad)
                .with_context(|| format!("Failed to read {}", clip.display()))?;
            session.save_mappings()?;
            println!("Mapped pad {pad} to {}", clip.display());
        }
        PadCommands::Clear { pad } => {
            match session.clear_pad(pad)? {
                Some(_) => println!("Cleared pad {pad}"),
                None => println!("Pad {pad} had no clip"),
            }
            session.save_mappings()?;
        }
        PadCommands::Listen { device } => {
            session.refresh_devices();
            let selected = session.select_device(&device)?;
            eprintln!("Listening on {selected}");
            print!("{}", Grid::render(session.store()));

            let (tx, rx) = mpsc::channel(64);
            let watcher = session.watch_selected(tx)?;
            let played = session.run(rx).await;
            watcher.await.context("Device watcher panicked")??;
            println!("Played {played} clips");
        }
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let mappings_file = std::env::var("MAPPINGS_FILE").ok();

    println!("padmosaic v{VERSION}");
    println!("MIDI pad clip mapper and palette mosaic quantizer\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE   = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  MAPPINGS_FILE = {}",
        mappings_file.as_deref().unwrap_or("(not set)")
    );

    let config = MosaicConfig::from_env();
    println!("\nMosaic:");
    match config.palette() {
        Ok(palette) => println!("  Palette: {} colors", palette.len()),
        Err(e) => println!("  Palette: invalid ({e})"),
    }
    println!("  Grid:    {0}x{0}", config.size);
    println!(
        "  Preview: {} px per cell -> {}",
        config.scale,
        config.output.display()
    );
    println!(
        "  Boost:   saturation {}, brightness {}",
        config.saturation, config.brightness
    );

    let path = mappings_path(None);
    println!("\nPads:");
    match std::fs::read(&path) {
        Ok(bytes) => {
            let mut store = MappingStore::new();
            match store.load_slice(&bytes) {
                Ok(()) => println!("  {}: {} of 64 pads mapped", path.display(), store.len()),
                Err(e) => println!("  {}: invalid ({e})", path.display()),
            }
        }
        Err(_) => println!("  {}: not found", path.display()),
    }

    println!("\nCommands:");
    println!("  padmosaic mosaic <IMAGE>            Quantize an image to an 8x8 mosaic");
    println!("  padmosaic pads grid                 Show the pad grid");
    println!("  padmosaic pads assign -p N -c FILE  Embed a clip on a pad");
    println!("  padmosaic pads clear -p N           Remove a pad's clip");
    println!("  padmosaic pads listen               Trigger clips from MIDI on stdin");
}
