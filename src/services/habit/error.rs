use std::path::PathBuf;

use thiserror::Error;

/// Failure reading or writing the habit document.
///
/// Never surfaced to the user: the store logs it and falls back to an empty
/// collection.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("failed to access habit document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to (de)serialize habit document {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors returned by habit operations
#[derive(Error, Debug)]
pub enum HabitError {
    /// The creation form was incomplete or inconsistent
    #[error("invalid habit: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, HabitError>;
