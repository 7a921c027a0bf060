//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - show-time: Live clock on the terminal
//! - set-alarm, list, delete, snooze: Manage alarms
//! - watch: Ring alarms when they are due
//! - config init: Initialize configuration file

pub mod alarm;
pub mod config;
pub mod time;
pub mod watch;

use std::path::{Path, PathBuf};

use crate::clock::AlarmClock;
use crate::config::Config;
use crate::error::Result;
use crate::player;
use crate::store::AlarmStore;

/// Settings shared by every command that touches alarms
pub struct Context {
    pub config: Config,
    alarms_file: PathBuf,
}

impl Context {
    /// Resolve config and the alarm file, `--alarms` winning over the config
    pub fn load(config_path: Option<&Path>, alarms_override: Option<PathBuf>) -> Result<Self> {
        let config = crate::config::load_or_default(config_path)?;
        let alarms_file = alarms_override.unwrap_or_else(|| config.alarms_file.clone());
        Ok(Self {
            config,
            alarms_file,
        })
    }

    /// Load the stored alarms. A broken alarm file is fatal here.
    pub fn open_clock(&self) -> Result<AlarmClock> {
        AlarmClock::open(
            AlarmStore::new(&self.alarms_file),
            player::default_player(),
            self.config.sound_file.clone(),
        )
    }
}
