// Test fixtures - reusable test data
// Provides consistent dates and habits across integration tests

#![allow(dead_code)]

use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, Jan 1, 2024
    pub fn jan_1_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Wednesday, Jan 3, 2024
    pub fn jan_3_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
    }

    /// Thursday, Jan 4, 2024
    pub fn jan_4_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 4).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample habits for testing
pub mod habits {
    use super::*;
    use habits_forge::models::habit::{Habit, TimeWindow};

    /// Habit "a" on Jan 3, 2024
    pub fn habit_a() -> Habit {
        Habit::builder()
            .id("a")
            .title("Утренняя зарядка")
            .description("15 минут")
            .date(dates::jan_3_2024())
            .schedule(TimeWindow::default())
            .build()
            .unwrap()
    }

    /// Habit "b" on Jan 4, 2024
    pub fn habit_b() -> Habit {
        Habit::builder()
            .id("b")
            .title("Read")
            .image_uri("content://media/external/images/42")
            .date(dates::jan_4_2024())
            .build()
            .unwrap()
    }
}

/// Install a test logger once; repeated calls are harmless.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
