//! Alarm persistence module
//!
//! Stores the ordered alarm list as a JSON array (alarms.json).
//! Writes go through a temp file in the same directory followed by a
//! rename, so a crash mid-write never leaves a truncated file behind.
//! There is no cross-process locking: two writers racing each other can
//! silently lose updates.

use std::collections::HashSet;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{ChimeError, Result};
use crate::models::Alarm;

/// Flat-file alarm store
#[derive(Debug, Clone)]
pub struct AlarmStore {
    path: PathBuf,
}

impl AlarmStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load every alarm from disk.
    ///
    /// A missing file is treated as an empty list. Anything unreadable,
    /// malformed or violating the alarm invariants is an error.
    pub fn load(&self) -> Result<Vec<Alarm>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "alarm file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(ChimeError::Store(format!(
                    "Cannot read alarms from '{}': {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let alarms: Vec<Alarm> = serde_json::from_str(&content).map_err(|e| {
            ChimeError::Store(format!(
                "Malformed alarm file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        check_invariants(&alarms).map_err(|reason| {
            ChimeError::Store(format!(
                "Invalid alarm file '{}': {}",
                self.path.display(),
                reason
            ))
        })?;

        tracing::debug!(path = %self.path.display(), count = alarms.len(), "loaded alarms");
        Ok(alarms)
    }

    /// Replace the stored list with `alarms`
    pub fn save(&self, alarms: &[Alarm]) -> Result<()> {
        let json = serde_json::to_string_pretty(alarms)?;
        atomic_write(&self.path, json.as_bytes())?;
        tracing::debug!(path = %self.path.display(), count = alarms.len(), "saved alarms");
        Ok(())
    }
}

fn check_invariants(alarms: &[Alarm]) -> std::result::Result<(), String> {
    let mut ids = HashSet::new();
    let mut slots = HashSet::new();

    for alarm in alarms {
        alarm.validate().map_err(|e| format!("alarm {}: {}", alarm.id, e))?;
        if alarm.id == 0 {
            return Err("alarm ids start at 1".to_string());
        }
        if !ids.insert(alarm.id) {
            return Err(format!("duplicate alarm id {}", alarm.id));
        }
        if !slots.insert((alarm.weekday, alarm.hour, alarm.minute)) {
            return Err(format!(
                "more than one alarm on {} {}",
                alarm.weekday,
                alarm.time_label()
            ));
        }
    }

    Ok(())
}

fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
