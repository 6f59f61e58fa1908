// Date utility functions
// Pure helpers shared by the grid generator and the navigator

use chrono::{Datelike, Days, Local, NaiveDate};

/// Russian month names in the nominative case, January first.
const MONTH_NAMES_RU: [&str; 12] = [
    "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август", "Сентябрь",
    "Октябрь", "Ноябрь", "Декабрь",
];

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Monday of the ISO week containing `date`.
pub fn start_of_iso_week(date: NaiveDate) -> NaiveDate {
    let days_to_subtract = u64::from(date.weekday().number_from_monday() - 1);
    date.checked_sub_days(Days::new(days_to_subtract))
        .unwrap_or(date)
}

/// Shift a date by a signed number of days.
///
/// Returns `None` when the result falls outside chrono's supported range.
pub fn shift_days(date: NaiveDate, delta: i64) -> Option<NaiveDate> {
    if delta >= 0 {
        date.checked_add_days(Days::new(delta.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(delta.unsigned_abs()))
    }
}

/// Display title for a month, e.g. `"Январь 2024"`.
pub fn month_title(year: i32, month: u32) -> String {
    let index = (month.clamp(1, 12) - 1) as usize;
    format!("{} {}", MONTH_NAMES_RU[index], year)
}
