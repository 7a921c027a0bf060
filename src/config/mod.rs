//! Configuration module
//!
//! Handles loading and saving of chime.toml configuration files.
//! Defines Config and its snooze and scheduler sections.

mod types;

pub use types::Config;

use crate::error::{ChimeError, Result};
use std::fs;
use std::path::Path;

/// Longest scan interval that still visits every calendar minute
pub const MAX_TICK_SECONDS: u64 = 60;

/// Config file used when `--config` is not given
pub const DEFAULT_PATH: &str = "chime.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        ChimeError::Config(format!(
            "Cannot read config from '{}': {}. Run 'chime config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Load the explicitly requested config, or the default file if present.
///
/// An explicit path must exist. The default path falls back to built-in
/// settings when there is no file.
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load(path),
        None => {
            let default_path = Path::new(DEFAULT_PATH);
            if default_path.exists() {
                load(default_path)
            } else {
                tracing::debug!("no {} found, using built-in settings", DEFAULT_PATH);
                Ok(Config::default())
            }
        }
    }
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| ChimeError::Config(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

fn validate(config: &Config) -> Result<()> {
    if config.snooze.minutes == 0 {
        return Err(ChimeError::Config(
            "snooze.minutes must be at least 1".to_string(),
        ));
    }
    if !(1..=MAX_TICK_SECONDS).contains(&config.scheduler.tick_seconds) {
        return Err(ChimeError::Config(format!(
            "scheduler.tick_seconds must be between 1 and {}, got {}",
            MAX_TICK_SECONDS, config.scheduler.tick_seconds
        )));
    }
    Ok(())
}
