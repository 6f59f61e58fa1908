use chrono::NaiveDate;

use crate::models::calendar_day::{CalendarDay, DayLabelConvention};
use crate::utils::date::{shift_days, start_of_iso_week};

/// Builds contiguous runs of [`CalendarDay`] values.
///
/// Generation is a pure function of its inputs; calling it twice with the same
/// arguments yields equal grids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayGridGenerator {
    labels: DayLabelConvention,
}

impl DayGridGenerator {
    pub fn new(labels: DayLabelConvention) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> DayLabelConvention {
        self.labels
    }

    /// Generate `count` consecutive days starting at `start` (inclusive).
    ///
    /// A day is flagged selected iff its date equals `selected`. A count of
    /// zero or less yields an empty grid. Generation stops early instead of
    /// overflowing chrono's date range.
    pub fn generate(
        &self,
        start: NaiveDate,
        count: i64,
        selected: Option<NaiveDate>,
    ) -> Vec<CalendarDay> {
        if count <= 0 {
            return Vec::new();
        }

        let capacity = usize::try_from(count).unwrap_or(usize::MAX).min(4096);
        let mut days = Vec::with_capacity(capacity);
        let mut current = Some(start);

        for _ in 0..count {
            let Some(date) = current else {
                break;
            };
            days.push(CalendarDay::new(date, self.labels, selected == Some(date)));
            current = date.succ_opt();
        }

        days
    }

    /// Seven days starting at the Monday of the week containing `date`.
    pub fn week(&self, date: NaiveDate, selected: Option<NaiveDate>) -> Vec<CalendarDay> {
        self.generate(start_of_iso_week(date), 7, selected)
    }

    /// Scrolling window of `count` days with `today` at index `days_before`.
    pub fn window_around(
        &self,
        today: NaiveDate,
        days_before: u32,
        count: u32,
        selected: Option<NaiveDate>,
    ) -> Vec<CalendarDay> {
        let start = shift_days(today, -i64::from(days_before)).unwrap_or(NaiveDate::MIN);
        self.generate(start, i64::from(count), selected)
    }
}
