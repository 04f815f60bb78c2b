//! Error types for loading schedules and validating CLI options.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid schedule in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    InvalidOption(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
