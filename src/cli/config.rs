use crate::config::{self, Config, DEFAULT_PATH};
use crate::error::{ChimeError, Result};
use std::path::PathBuf;

/// Write the built-in settings to a new config file
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let target = path.unwrap_or_else(|| PathBuf::from(DEFAULT_PATH));
    if target.exists() {
        return Err(ChimeError::Config(format!(
            "'{}' already exists; remove it first to write fresh defaults",
            target.display()
        )));
    }

    let defaults = Config::default();
    config::save(&defaults, &target)?;
    tracing::info!(path = %target.display(), "wrote default config");

    println!("Wrote default settings to {}", target.display());
    println!(
        "  alarms: {}  sound: {}",
        defaults.alarms_file.display(),
        defaults.sound_file.display()
    );
    println!(
        "  auto-snooze: {} min, at most {} times",
        defaults.snooze.minutes, defaults.snooze.max_count
    );
    println!("Add an alarm with 'chime set-alarm', then start ringing with 'chime watch'.");

    Ok(())
}
