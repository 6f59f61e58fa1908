// Calendar day model
// One cell of a generated day grid

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Monday-first Cyrillic abbreviations, indexed by ISO weekday - 1.
pub const CYRILLIC_DAY_LABELS: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

/// Sunday-first English abbreviations, indexed by ISO weekday % 7.
pub const ENGLISH_DAY_LABELS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Which set of weekday labels a grid is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayLabelConvention {
    /// "Пн" .. "Вс"
    #[default]
    MondayFirstCyrillic,
    /// "SUN" .. "SAT"
    SundayFirstEnglish,
}

impl DayLabelConvention {
    /// Short label for a weekday.
    ///
    /// ISO numbering is Monday = 1 .. Sunday = 7, so Sunday lands on index 6
    /// of the Cyrillic set and on index 0 of the English set.
    pub fn label(self, weekday: Weekday) -> &'static str {
        let iso = weekday.number_from_monday() as usize;
        match self {
            DayLabelConvention::MondayFirstCyrillic => CYRILLIC_DAY_LABELS[iso - 1],
            DayLabelConvention::SundayFirstEnglish => ENGLISH_DAY_LABELS[iso % 7],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayLabelConvention::MondayFirstCyrillic => "monday_first_cyrillic",
            DayLabelConvention::SundayFirstEnglish => "sunday_first_english",
        }
    }
}

/// A single day in a generated grid.
///
/// Values are never mutated in place; a selection change produces a new
/// instance through [`CalendarDay::with_selection`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day_of_month: String,
    pub day_of_week: String,
    pub is_selected: bool,
}

impl CalendarDay {
    pub fn new(date: NaiveDate, labels: DayLabelConvention, is_selected: bool) -> Self {
        Self {
            date,
            day_of_month: date.day().to_string(),
            day_of_week: labels.label(date.weekday()).to_string(),
            is_selected,
        }
    }

    /// Copy of this day with the selection flag replaced.
    pub fn with_selection(&self, is_selected: bool) -> Self {
        Self {
            is_selected,
            ..self.clone()
        }
    }
}
