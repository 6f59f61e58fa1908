// Service module exports

pub mod bet;
pub mod calendar;
pub mod habit;
pub mod settings;
