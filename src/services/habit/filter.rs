use chrono::NaiveDate;

use crate::models::habit::Habit;

/// Habits active on `date`, in input order.
pub fn habits_on(date: NaiveDate, habits: &[Habit]) -> Vec<&Habit> {
    habits.iter().filter(|habit| habit.applies_on(date)).collect()
}
