//! Command-line driver for merging, splitting and tiling images.
//!
//! Owns everything around the pixel work in `image_ops`: configuration,
//! path checks, directory listing, decoding and PNG encoding.

pub mod commands;
pub mod config;
pub mod error;
pub mod files;

pub use config::AppConfig;
pub use error::{CliError, Result};

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
