// Module exports for models

pub mod bet;
pub mod calendar_day;
pub mod habit;
pub mod selection;
pub mod settings;
