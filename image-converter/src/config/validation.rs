//! Setting value validation.

use super::{ENV_EXTENSIONS, ENV_LOG, ENV_OVERWRITE};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        ENV_EXTENSIONS => {
            let exts = parse_extensions(value);
            if exts.is_empty() {
                return Err("must list at least one extension".into());
            }
            if let Some(bad) = exts
                .iter()
                .find(|e| !e.chars().all(|c| c.is_ascii_alphanumeric()))
            {
                return Err(format!("invalid extension '{bad}'"));
            }
        }
        ENV_OVERWRITE => validate_bool(value)?,
        ENV_LOG => {
            if !LOG_LEVELS.contains(&value.trim().to_ascii_lowercase().as_str()) {
                return Err(format!("must be one of {}", LOG_LEVELS.join(", ")));
            }
        }
        _ => {}
    }
    Ok(())
}

/// Split a comma list into lowercase extensions without leading dots.
pub fn parse_extensions(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

fn validate_bool(value: &str) -> Result<(), String> {
    match value.trim() {
        "true" | "false" => Ok(()),
        _ => Err("must be 'true' or 'false'".into()),
    }
}
