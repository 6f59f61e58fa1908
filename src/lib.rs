// HabitsForge core library
// Calendar day grids, single-day selection, habit persistence and habit bets

pub mod models;
pub mod services;
pub mod utils;

pub use models::bet::{BetStatus, HabitBet, User};
pub use models::calendar_day::{CalendarDay, DayLabelConvention};
pub use models::habit::{Habit, HabitBuilder, TimeWindow};
pub use models::selection::SelectionPolicy;
pub use models::settings::Settings;
pub use services::bet::{BetError, BetService};
pub use services::calendar::{CalendarNavigator, DayGridGenerator, SelectionController};
pub use services::habit::{habits_on, HabitService, HabitStore};
