use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scheduler::SnoozePolicy;

/// Chime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file holding the alarm list
    pub alarms_file: PathBuf,

    /// Sound played when an alarm rings
    pub sound_file: PathBuf,

    /// Automatic snooze behaviour
    pub snooze: SnoozeSettings,

    /// Scan loop settings
    pub scheduler: SchedulerSettings,
}

/// Automatic snooze settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnoozeSettings {
    /// Minutes a rung alarm is pushed back by
    pub minutes: u32,

    /// Snoozes allowed before an alarm just rings
    pub max_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerSettings {
    /// Seconds between scans
    pub tick_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alarms_file: PathBuf::from("./alarms.json"),
            sound_file: PathBuf::from("./alarm.wav"),
            snooze: SnoozeSettings::default(),
            scheduler: SchedulerSettings::default(),
        }
    }
}

impl Default for SnoozeSettings {
    fn default() -> Self {
        Self {
            minutes: 5,
            max_count: 3,
        }
    }
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self { tick_seconds: 60 }
    }
}

impl From<&SnoozeSettings> for SnoozePolicy {
    fn from(snooze: &SnoozeSettings) -> Self {
        Self {
            minutes: snooze.minutes,
            max_count: snooze.max_count,
        }
    }
}
