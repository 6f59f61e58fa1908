//! Habit storage capability.
//!
//! Stores replace the whole collection on every save. Failures never reach
//! the caller: they are logged and treated as "no data".

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::persistence::{read_document, write_document};
use crate::models::habit::Habit;
use crate::models::settings::Settings;
use crate::services::settings::SettingsService;

/// Fixed namespace of the habit document inside the data directory.
pub const HABITS_NAMESPACE: &str = "habits_prefs";

#[cfg_attr(test, mockall::automock)]
pub trait HabitStore {
    /// Load every stored habit. Returns an empty list on any failure.
    fn load(&self) -> Vec<Habit>;

    /// Replace the stored collection with `habits`.
    fn save(&self, habits: &[Habit]);
}

/// Habit store backed by a single JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileHabitStore {
    path: PathBuf,
}

impl JsonFileHabitStore {
    /// Store whose document lives in `data_dir` under the fixed namespace.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(format!("{}.json", HABITS_NAMESPACE)),
        }
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform data directory (or the environment override).
    pub fn default_location() -> Result<Self> {
        let data_dir = SettingsService::default_data_dir()?;
        Ok(Self::in_dir(&data_dir))
    }

    /// Store in the data directory selected by `settings`.
    pub fn for_settings(settings: &Settings) -> Result<Self> {
        let data_dir = SettingsService::data_dir_for(settings)?;
        Ok(Self::in_dir(&data_dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HabitStore for JsonFileHabitStore {
    fn load(&self) -> Vec<Habit> {
        match read_document(&self.path) {
            Ok(habits) => {
                log::info!("Loaded {} habits from {}", habits.len(), self.path.display());
                habits
            }
            Err(e) => {
                log::warn!("Failed to load habits, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    fn save(&self, habits: &[Habit]) {
        match write_document(&self.path, habits) {
            Ok(()) => log::info!("Saved {} habits to {}", habits.len(), self.path.display()),
            Err(e) => log::warn!("Failed to save habits: {}", e),
        }
    }
}

/// Volatile store for tests and previews.
#[derive(Debug, Default)]
pub struct InMemoryHabitStore {
    habits: RefCell<Vec<Habit>>,
}

impl InMemoryHabitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_habits(habits: Vec<Habit>) -> Self {
        Self {
            habits: RefCell::new(habits),
        }
    }

    /// Copy of the currently stored collection.
    pub fn snapshot(&self) -> Vec<Habit> {
        self.habits.borrow().clone()
    }
}

impl HabitStore for InMemoryHabitStore {
    fn load(&self) -> Vec<Habit> {
        self.snapshot()
    }

    fn save(&self, habits: &[Habit]) {
        *self.habits.borrow_mut() = habits.to_vec();
    }
}

impl<S: HabitStore + ?Sized> HabitStore for &S {
    fn load(&self) -> Vec<Habit> {
        (**self).load()
    }

    fn save(&self, habits: &[Habit]) {
        (**self).save(habits)
    }
}
