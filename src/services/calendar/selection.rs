use chrono::NaiveDate;

use crate::models::calendar_day::CalendarDay;
use crate::models::selection::SelectionPolicy;

/// Resolves day clicks into a new grid and a new selected date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionController {
    policy: SelectionPolicy,
}

impl SelectionController {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Apply a click on `clicked` to `grid`.
    ///
    /// The returned grid always has at most one selected day, no matter how
    /// many were flagged on input. A click on a date that is not part of the
    /// grid yields a grid with nothing selected.
    pub fn on_day_clicked(
        &self,
        grid: &[CalendarDay],
        clicked: NaiveDate,
    ) -> (Vec<CalendarDay>, Option<NaiveDate>) {
        let Some(clicked_day) = grid.iter().find(|day| day.date == clicked) else {
            log::debug!("Click on {} outside the visible grid, clearing selection", clicked);
            return (Self::apply(grid, None), None);
        };

        let selected = if clicked_day.is_selected && self.policy.toggles_off() {
            None
        } else {
            Some(clicked)
        };

        log::debug!(
            "Day {} clicked ({:?}), selection is now {:?}",
            clicked,
            self.policy,
            selected
        );
        (Self::apply(grid, selected), selected)
    }

    /// Rebuild `grid` so that only `selected` (if any) is flagged.
    pub fn apply(grid: &[CalendarDay], selected: Option<NaiveDate>) -> Vec<CalendarDay> {
        grid.iter()
            .map(|day| {
                let is_selected = selected == Some(day.date);
                if day.is_selected == is_selected {
                    day.clone()
                } else {
                    day.with_selection(is_selected)
                }
            })
            .collect()
    }

    /// Date of the first selected day in `grid`.
    pub fn selected_date(grid: &[CalendarDay]) -> Option<NaiveDate> {
        grid.iter().find(|day| day.is_selected).map(|day| day.date)
    }
}
