use chrono::{Datelike, NaiveDate};

use super::{DayGridGenerator, SelectionController};
use crate::models::calendar_day::CalendarDay;
use crate::models::selection::SelectionPolicy;
use crate::models::settings::Settings;
use crate::utils::date::{month_title, shift_days, start_of_iso_week};

const DAYS_PER_WEEK: u32 = 7;

/// How the visible range is anchored when jumping back to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    /// Monday-aligned single week
    Week,
    /// Fixed-length window with today `days_before` days from the start
    Window { days_before: u32 },
}

/// Caller-side calendar state: the visible range and the selected day.
///
/// The grid itself is never stored; [`CalendarNavigator::grid`] rebuilds it
/// from the range and selection on every call.
#[derive(Debug, Clone)]
pub struct CalendarNavigator {
    generator: DayGridGenerator,
    controller: SelectionController,
    anchor: Anchor,
    today: NaiveDate,
    start: NaiveDate,
    count: u32,
    selected: Option<NaiveDate>,
}

impl CalendarNavigator {
    /// Single week view starting on the Monday of `today`'s week.
    pub fn week_of(today: NaiveDate, generator: DayGridGenerator, policy: SelectionPolicy) -> Self {
        Self {
            generator,
            controller: SelectionController::new(policy),
            anchor: Anchor::Week,
            today,
            start: start_of_iso_week(today),
            count: DAYS_PER_WEEK,
            selected: policy.selects_today_initially().then_some(today),
        }
    }

    /// Scrolling window of `count` days beginning `days_before` days before `today`.
    pub fn scrolling(
        today: NaiveDate,
        days_before: u32,
        count: u32,
        generator: DayGridGenerator,
        policy: SelectionPolicy,
    ) -> Self {
        let mut navigator = Self {
            generator,
            controller: SelectionController::new(policy),
            anchor: Anchor::Window { days_before },
            today,
            start: today,
            count,
            selected: None,
        };
        navigator.start = navigator.anchor_start(today);
        if policy.selects_today_initially() && navigator.contains(today) {
            navigator.selected = Some(today);
        }
        navigator
    }

    /// Scrolling window configured from user settings.
    pub fn from_settings(today: NaiveDate, settings: &Settings) -> Self {
        Self::scrolling(
            today,
            settings.days_before_today,
            settings.visible_days,
            DayGridGenerator::new(settings.day_labels),
            settings.selection_policy,
        )
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn len(&self) -> u32 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Last visible date, if the range is not empty. Clamped to the last date
    /// the calendar can represent, matching where the generated grid stops.
    pub fn end(&self) -> Option<NaiveDate> {
        if self.count == 0 {
            return None;
        }
        Some(shift_days(self.start, i64::from(self.count) - 1).unwrap_or(NaiveDate::MAX))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.end() {
            Some(end) => self.start <= date && date <= end,
            None => false,
        }
    }

    /// The visible grid with the current selection applied.
    pub fn grid(&self) -> Vec<CalendarDay> {
        self.generator
            .generate(self.start, i64::from(self.count), self.selected)
    }

    /// Handle a click on `date` and return the rebuilt grid.
    pub fn click(&mut self, date: NaiveDate) -> Vec<CalendarDay> {
        let (grid, selected) = self.controller.on_day_clicked(&self.grid(), date);
        self.selected = selected;
        grid
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn next_week(&mut self) {
        self.shift(i64::from(DAYS_PER_WEEK));
    }

    pub fn previous_week(&mut self) {
        self.shift(-i64::from(DAYS_PER_WEEK));
    }

    /// Re-anchor the visible range on `today`.
    pub fn jump_to_today(&mut self, today: NaiveDate) {
        self.today = today;
        self.start = self.anchor_start(today);
        self.drop_selection_outside_range();
    }

    /// Year and month shown in the header: the selected day's month if any.
    /// Otherwise the week strip shows its Monday's month and the scrolling
    /// window shows today's month.
    pub fn title_month(&self) -> (i32, u32) {
        let fallback = match self.anchor {
            Anchor::Week => self.start,
            Anchor::Window { .. } => self.today,
        };
        let shown = self.selected.unwrap_or(fallback);
        (shown.year(), shown.month())
    }

    /// Header text such as `"Январь 2024"`.
    pub fn title(&self) -> String {
        let (year, month) = self.title_month();
        month_title(year, month)
    }

    fn shift(&mut self, delta_days: i64) {
        match shift_days(self.start, delta_days) {
            Some(start) => {
                self.start = start;
                self.drop_selection_outside_range();
                log::debug!("Visible range now starts at {}", self.start);
            }
            None => log::warn!("Cannot page {} days from {}", delta_days, self.start),
        }
    }

    fn anchor_start(&self, today: NaiveDate) -> NaiveDate {
        match self.anchor {
            Anchor::Week => start_of_iso_week(today),
            Anchor::Window { days_before } => {
                shift_days(today, -i64::from(days_before)).unwrap_or(NaiveDate::MIN)
            }
        }
    }

    fn drop_selection_outside_range(&mut self) {
        if let Some(selected) = self.selected {
            if !self.contains(selected) {
                log::debug!("Selected day {} left the visible range", selected);
                self.selected = None;
            }
        }
    }
}
