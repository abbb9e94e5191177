//! Error types for settings persistence and the annotation loop.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DayTintError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access settings file {}: {source}", .path.display())]
    SettingsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file {}: {source}", .path.display())]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Settings document {} is not a JSON object", .0.display())]
    MalformedDocument(PathBuf),

    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    #[error("No loaded calendar at index {index} ({len} loaded)")]
    CalendarIndex { index: usize, len: usize },
}

impl From<toml::de::Error> for DayTintError {
    fn from(err: toml::de::Error) -> Self {
        DayTintError::Config(err.to_string())
    }
}

pub type DayTintResult<T> = Result<T, DayTintError>;
