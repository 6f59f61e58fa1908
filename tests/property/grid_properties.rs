// Property-based tests for grid generation, selection and habit filtering

use chrono::{Days, NaiveDate};
use habits_forge::models::calendar_day::CalendarDay;
use habits_forge::{habits_on, DayGridGenerator, DayLabelConvention, Habit, SelectionController};
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1990..2100i32, 1..=12u32, 1..=28u32)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn convention_strategy() -> impl Strategy<Value = DayLabelConvention> {
    prop_oneof![
        Just(DayLabelConvention::MondayFirstCyrillic),
        Just(DayLabelConvention::SundayFirstEnglish),
    ]
}

fn selected_count(grid: &[CalendarDay]) -> usize {
    grid.iter().filter(|day| day.is_selected).count()
}

proptest! {
    /// Property: a grid has `count` contiguous days starting at `start`
    #[test]
    fn prop_grid_is_contiguous(
        start in date_strategy(),
        count in 0..400i64,
        labels in convention_strategy(),
    ) {
        let grid = DayGridGenerator::new(labels).generate(start, count, None);

        prop_assert_eq!(grid.len() as i64, count);
        if let Some(first) = grid.first() {
            prop_assert_eq!(first.date, start);
        }
        for pair in grid.windows(2) {
            prop_assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
        prop_assert_eq!(selected_count(&grid), 0);
    }

    /// Property: selecting a generated date flags exactly that entry
    #[test]
    fn prop_selected_date_in_range_is_unique(
        start in date_strategy(),
        count in 1..120i64,
        offset in 0..120u64,
    ) {
        let offset = offset % count as u64;
        let selected = start.checked_add_days(Days::new(offset)).unwrap();
        let grid = DayGridGenerator::default().generate(start, count, Some(selected));

        let flagged: Vec<NaiveDate> = grid
            .iter()
            .filter(|day| day.is_selected)
            .map(|day| day.date)
            .collect();
        prop_assert_eq!(flagged, vec![selected]);
    }

    /// Property: clicking an unselected day twice restores the unselected grid
    #[test]
    fn prop_toggle_law(
        start in date_strategy(),
        clicked_offset in 0..7u64,
        prior_offset in proptest::option::of(0..7u64),
    ) {
        let clicked = start.checked_add_days(Days::new(clicked_offset)).unwrap();
        let prior = prior_offset
            .map(|offset| start.checked_add_days(Days::new(offset)).unwrap())
            .filter(|date| *date != clicked);

        let generator = DayGridGenerator::default();
        let controller = SelectionController::default();
        let grid = generator.generate(start, 7, prior);

        let (once, _) = controller.on_day_clicked(&grid, clicked);
        let (twice, selected) = controller.on_day_clicked(&once, clicked);

        prop_assert_eq!(selected, None);
        prop_assert_eq!(twice, generator.generate(start, 7, None));
    }

    /// Property: no click sequence yields more than one selected day
    #[test]
    fn prop_single_selection_after_any_clicks(
        start in date_strategy(),
        clicks in proptest::collection::vec(-3..10i64, 0..40),
    ) {
        let controller = SelectionController::default();
        let mut grid = DayGridGenerator::default().generate(start, 7, None);

        for offset in clicks {
            let date = if offset >= 0 {
                start.checked_add_days(Days::new(offset as u64)).unwrap()
            } else {
                start.checked_sub_days(Days::new(offset.unsigned_abs())).unwrap()
            };
            let (next, selected) = controller.on_day_clicked(&grid, date);
            prop_assert!(selected_count(&next) <= 1);
            prop_assert_eq!(SelectionController::selected_date(&next), selected);
            grid = next;
        }
    }

    /// Property: filtering keeps exactly the habits on that date, in order
    #[test]
    fn prop_habits_on_filters_in_order(
        day in date_strategy(),
        memberships in proptest::collection::vec(any::<bool>(), 0..20),
    ) {
        let other = day.succ_opt().unwrap();
        let habits: Vec<Habit> = memberships
            .iter()
            .enumerate()
            .map(|(i, on_day)| {
                Habit::builder()
                    .id(format!("h{}", i))
                    .title(format!("Habit {}", i))
                    .date(if *on_day { day } else { other })
                    .build()
                    .unwrap()
            })
            .collect();

        let expected: Vec<String> = memberships
            .iter()
            .enumerate()
            .filter(|(_, on_day)| **on_day)
            .map(|(i, _)| format!("h{}", i))
            .collect();
        let actual: Vec<String> = habits_on(day, &habits)
            .into_iter()
            .map(|habit| habit.id.clone())
            .collect();

        prop_assert_eq!(actual, expected);
    }
}
