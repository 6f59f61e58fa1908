// Habit module
// A user-defined activity tied to a set of calendar dates

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Optional time-of-day window for a habit ("09:00" - "10:00").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl TimeWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, String> {
        if end <= start {
            return Err("Habit end time must be after start time".to_string());
        }
        Ok(Self { start, end })
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default(),
        }
    }
}

/// Habit record as stored in the habit document.
///
/// Unknown fields are ignored when reading so older and newer documents stay
/// readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(
        rename = "imageUriString",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_uri: Option<String>,
    #[serde(default)]
    pub selected_dates: BTreeSet<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<TimeWindow>,
}

impl Habit {
    /// Create a builder for constructing habits with optional fields
    pub fn builder() -> HabitBuilder {
        HabitBuilder::new()
    }

    /// Whether the habit applies on `date`.
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        self.selected_dates.contains(&date)
    }

    /// Validate the habit
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Habit id cannot be empty".to_string());
        }

        if self.title.trim().is_empty() {
            return Err("Habit title cannot be empty".to_string());
        }

        if self.selected_dates.is_empty() {
            return Err("Habit must apply to at least one date".to_string());
        }

        if let Some(window) = self.schedule {
            if window.end <= window.start {
                return Err("Habit end time must be after start time".to_string());
            }
        }

        Ok(())
    }
}

/// Builder for creating habits from the creation form
#[derive(Debug, Default, Clone)]
pub struct HabitBuilder {
    id: Option<String>,
    title: Option<String>,
    description: String,
    image_uri: Option<String>,
    selected_dates: BTreeSet<NaiveDate>,
    schedule: Option<TimeWindow>,
}

impl HabitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn has_id(&self) -> bool {
        self.id.is_some()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach an opaque image reference. Not validated.
    pub fn image_uri(mut self, uri: impl Into<String>) -> Self {
        self.image_uri = Some(uri.into());
        self
    }

    /// Add one applicable date
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.selected_dates.insert(date);
        self
    }

    pub fn dates(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.selected_dates.extend(dates);
        self
    }

    pub fn schedule(mut self, window: TimeWindow) -> Self {
        self.schedule = Some(window);
        self
    }

    /// Build the habit
    pub fn build(self) -> Result<Habit, String> {
        let id = self.id.ok_or("Habit id is required")?;
        let title = self.title.ok_or("Habit title is required")?;

        let habit = Habit {
            id,
            title,
            description: self.description,
            image_uri: self.image_uri,
            selected_dates: self.selected_dates,
            schedule: self.schedule,
        };

        habit.validate()?;
        Ok(habit)
    }
}

/// `"HH:MM"` encoding for times of day.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
