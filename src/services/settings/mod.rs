mod service;

pub use service::{SettingsService, DATA_DIR_ENV};
