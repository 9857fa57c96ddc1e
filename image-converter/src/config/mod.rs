//! Configuration management: defaults, validation, environment overrides.

pub mod app_config;
pub mod validation;

pub use app_config::AppConfig;

/// Comma-separated list of input extensions accepted for tiling.
pub const ENV_EXTENSIONS: &str = "IMAGE_CONVERTER_EXTENSIONS";
/// `true` to allow replacing existing output files.
pub const ENV_OVERWRITE: &str = "IMAGE_CONVERTER_OVERWRITE";
/// Default log filter used when `RUST_LOG` is unset.
pub const ENV_LOG: &str = "IMAGE_CONVERTER_LOG";

pub const DEFAULT_EXTENSIONS: &str = "png,jpg";
pub const DEFAULT_LOG_LEVEL: &str = "info";
