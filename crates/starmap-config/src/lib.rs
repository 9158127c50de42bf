//! Configuration for the starmap crates.
//!
//! Camera limits, animation timings, and layout tunables persist to disk as a
//! RON file. Supports CLI overrides via clap, hot-reload detection, validation,
//! and forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, CameraConfig, Config, DebugConfig, LayoutConfig, SizeScale, SizeScaleTable,
    default_config_dir,
};
pub use error::ConfigError;
