//! Command-line argument parsing for the starmap demo.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Starmap command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "starmap", about = "Orbital map camera and layout demo")]
pub struct CliArgs {
    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace) or a full filter string.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Seed for body phase angles.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1600.0)]
    pub viewport_width: f32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 900.0)]
    pub viewport_height: f32,

    /// Number of simulated frames.
    #[arg(long, default_value_t = 180)]
    pub frames: u32,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(seed) = args.seed {
            self.layout.phase_seed = Some(seed);
        }
    }
}
