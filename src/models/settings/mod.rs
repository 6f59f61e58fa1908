// Settings module
// User preferences for the calendar strip and habit storage

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::calendar_day::DayLabelConvention;
use crate::models::selection::SelectionPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub day_labels: DayLabelConvention,
    pub selection_policy: SelectionPolicy,
    /// Length of the scrolling day window
    pub visible_days: u32,
    /// How many of those days lie before today
    pub days_before_today: u32,
    /// Overrides the platform data directory for the habit document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            day_labels: DayLabelConvention::MondayFirstCyrillic,
            selection_policy: SelectionPolicy::AllowNone,
            visible_days: 120,
            days_before_today: 30,
            data_dir: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.visible_days == 0 {
            return Err("visible_days must be at least 1".to_string());
        }

        if self.days_before_today >= self.visible_days {
            return Err(format!(
                "days_before_today ({}) must be less than visible_days ({})",
                self.days_before_today, self.visible_days
            ));
        }

        Ok(())
    }
}
