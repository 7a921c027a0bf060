use thiserror::Error;

use crate::models::Weekday;

/// Chime error types
#[derive(Error, Debug)]
pub enum ChimeError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Alarm already exists: {weekday} {hour:02}:{minute:02}")]
    DuplicateAlarm {
        weekday: Weekday,
        hour: u8,
        minute: u8,
    },

    #[error("No alarm with id {0}")]
    AlarmNotFound(u64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Alarm store error: {0}")]
    Store(String),

    #[error("Playback error: {0}")]
    Playback(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Chime operations
pub type Result<T> = std::result::Result<T, ChimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_validation() {
        let err = ChimeError::Validation("hour must be between 0 and 23".to_string());
        assert_eq!(err.to_string(), "Invalid input: hour must be between 0 and 23");
    }

    #[test]
    fn test_error_display_duplicate_pads_time() {
        let err = ChimeError::DuplicateAlarm {
            weekday: Weekday::Monday,
            hour: 7,
            minute: 5,
        };
        assert_eq!(err.to_string(), "Alarm already exists: Monday 07:05");
    }

    #[test]
    fn test_error_display_not_found() {
        let err = ChimeError::AlarmNotFound(4);
        assert_eq!(err.to_string(), "No alarm with id 4");
    }

    #[test]
    fn test_error_display_store() {
        let err = ChimeError::Store("broken file".to_string());
        assert_eq!(err.to_string(), "Alarm store error: broken file");
    }
}
