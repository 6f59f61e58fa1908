// Parameterized tests for selection policies and label conventions

use chrono::{NaiveDate, Weekday};
use habits_forge::{
    CalendarNavigator, DayGridGenerator, DayLabelConvention, SelectionController, SelectionPolicy,
};
use test_case::test_case;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test_case(SelectionPolicy::AllowNone, None ; "allow none clears on second click")]
#[test_case(SelectionPolicy::AlwaysOne, Some(ymd(2024, 1, 3)) ; "always one keeps the day")]
fn test_second_click_on_same_day(policy: SelectionPolicy, expected: Option<NaiveDate>) {
    let controller = SelectionController::new(policy);
    let grid = DayGridGenerator::default().generate(ymd(2024, 1, 1), 7, None);

    let (grid, _) = controller.on_day_clicked(&grid, ymd(2024, 1, 3));
    let (_, selected) = controller.on_day_clicked(&grid, ymd(2024, 1, 3));

    assert_eq!(selected, expected, "policy {}", policy.as_str());
}

#[test_case(SelectionPolicy::AllowNone, None)]
#[test_case(SelectionPolicy::AlwaysOne, Some(ymd(2024, 1, 4)))]
fn test_initial_selection(policy: SelectionPolicy, expected: Option<NaiveDate>) {
    let navigator = CalendarNavigator::week_of(ymd(2024, 1, 4), DayGridGenerator::default(), policy);
    assert_eq!(navigator.selected(), expected);
}

#[test_case(7, "Вс", "SUN" ; "sunday is iso 7")]
#[test_case(1, "Пн", "MON" ; "monday is iso 1")]
#[test_case(6, "Сб", "SAT" ; "saturday is iso 6")]
fn test_label_index_alignment(iso_day: u32, cyrillic: &str, english: &str) {
    // 2024-01-01 is a Monday, so day N of that week has ISO number N
    let date = ymd(2024, 1, iso_day);
    let weekday: Weekday = chrono::Datelike::weekday(&date);
    assert_eq!(weekday.number_from_monday(), iso_day);

    let cyr = DayGridGenerator::new(DayLabelConvention::MondayFirstCyrillic).generate(date, 1, None);
    let eng = DayGridGenerator::new(DayLabelConvention::SundayFirstEnglish).generate(date, 1, None);

    assert_eq!(cyr[0].day_of_week, cyrillic);
    assert_eq!(eng[0].day_of_week, english);
}

#[test]
fn test_default_policy_allows_none() {
    assert_eq!(SelectionPolicy::default(), SelectionPolicy::AllowNone);
    assert!(SelectionPolicy::AllowNone.toggles_off());
    assert!(!SelectionPolicy::AlwaysOne.toggles_off());
}
