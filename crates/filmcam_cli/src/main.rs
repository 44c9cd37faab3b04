//! filmcam CLI
//!
//! Prints what the library resolves for a given set of inputs:
//! - `palette`: theme colors for a mode, device scheme and accent
//! - `style`: film parameters of a camera style
//! - `overlay`: the composed overlay layers, grain included
//! - `locales`: supported locales and device locale negotiation
//! - `config`: the effective `filmcam.toml`

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "filmcam")]
#[command(about = "Inspect filmcam palettes, film styles and overlays")]
#[command(version)]
struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the theme palette
    Palette {
        /// Theme mode: system, light or dark
        #[arg(long, default_value = "system")]
        mode: String,

        /// Report the device scheme as dark
        #[arg(long)]
        system_dark: bool,

        /// Accent preset id
        #[arg(long, default_value = "blue")]
        accent: String,

        /// Print JSON instead of a token table
        #[arg(long)]
        json: bool,
    },

    /// Show the film parameters of a camera style
    Style {
        /// Camera style id
        style: String,

        /// Resolve against the dark palette
        #[arg(long)]
        dark: bool,

        /// Base vignette intensity
        #[arg(long, default_value_t = filmcam_film::DEFAULT_INTENSITY)]
        intensity: f32,
    },

    /// Compose the overlay layers for a camera style
    Overlay {
        /// Camera style id
        style: String,

        /// Leave out the grain layer
        #[arg(long)]
        no_grain: bool,

        /// Resolve against the dark palette
        #[arg(long)]
        dark: bool,

        /// Base vignette intensity
        #[arg(long, default_value_t = filmcam_film::DEFAULT_INTENSITY)]
        intensity: f32,

        /// Seed for reproducible grain
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List supported locales
    Locales {
        /// Device locale to negotiate
        #[arg(long)]
        device: Option<String>,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Directory containing filmcam.toml, or the file itself
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Logs go to stderr so stdout stays machine-readable.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let output = match cli.command {
        Commands::Palette {
            mode,
            system_dark,
            accent,
            json,
        } => commands::palette(&mode, system_dark, &accent, json)?,
        Commands::Style {
            style,
            dark,
            intensity,
        } => commands::style(&style, dark, intensity)?,
        Commands::Overlay {
            style,
            no_grain,
            dark,
            intensity,
            seed,
        } => commands::overlay(&style, !no_grain, dark, intensity, seed)?,
        Commands::Locales { device } => commands::locales(device.as_deref()),
        Commands::Config { dir } => commands::config(&dir)?,
    };

    println!("{output}");
    Ok(())
}
