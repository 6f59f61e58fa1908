use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::error::PersistenceError;
use crate::models::habit::Habit;

/// Read the habit document at `path`. A missing file is an empty list.
pub fn read_document(path: &Path) -> Result<Vec<Habit>, PersistenceError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if data.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&data).map_err(|source| PersistenceError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the habit document at `path` with `habits`.
pub fn write_document(path: &Path, habits: &[Habit]) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| PersistenceError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let data = serde_json::to_string_pretty(habits).map_err(|source| PersistenceError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, data).map_err(|source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    })
}
