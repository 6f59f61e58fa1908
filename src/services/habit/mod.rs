//! Habit list management.
//! Date filtering, the storage capability and the service that ties them
//! together.

pub mod error;
pub mod filter;
mod persistence;
pub mod service;
pub mod store;

pub use error::{HabitError, PersistenceError};
pub use filter::habits_on;
pub use service::HabitService;
pub use store::{HabitStore, InMemoryHabitStore, JsonFileHabitStore, HABITS_NAMESPACE};
