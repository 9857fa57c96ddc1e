//! Runtime configuration populated from defaults and environment overrides.

use std::path::Path;

use super::validation::{parse_extensions, validate_setting};
use super::{DEFAULT_EXTENSIONS, DEFAULT_LOG_LEVEL, ENV_EXTENSIONS, ENV_LOG, ENV_OVERWRITE};
use crate::error::{CliError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Lowercase input extensions, without the leading dot.
    pub extensions: Vec<String>,
    pub overwrite: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            extensions: parse_extensions(DEFAULT_EXTENSIONS),
            overwrite: false,
            log_level: DEFAULT_LOG_LEVEL.into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// unset keys. Every present value is validated.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| -> Result<Option<String>> {
            match lookup(key) {
                Some(value) => {
                    validate_setting(key, &value).map_err(|message| CliError::Config {
                        key: key.to_string(),
                        message,
                    })?;
                    Ok(Some(value))
                }
                None => Ok(None),
            }
        };

        let mut config = Self::default();
        if let Some(v) = get(ENV_EXTENSIONS)? {
            config.extensions = parse_extensions(&v);
        }
        if let Some(v) = get(ENV_OVERWRITE)? {
            config.overwrite = v.trim() == "true";
        }
        if let Some(v) = get(ENV_LOG)? {
            config.log_level = v.trim().to_ascii_lowercase();
        }
        Ok(config)
    }

    /// Builder: force overwrite on or off.
    pub fn with_overwrite(mut self, val: bool) -> Self {
        self.overwrite = val;
        self
    }

    /// Whether `path` carries one of the configured extensions.
    ///
    /// Matching ignores case; files without an extension never match.
    pub fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| {
                let e = e.to_ascii_lowercase();
                self.extensions.iter().any(|x| *x == e)
            })
            .unwrap_or(false)
    }
}
