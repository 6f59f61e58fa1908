use chrono::{Local, NaiveDate};

use super::error::{HabitError, Result};
use super::filter::habits_on;
use super::store::HabitStore;
use crate::models::habit::{Habit, HabitBuilder};

/// Owns the in-memory habit list and writes it through to a [`HabitStore`].
pub struct HabitService<S: HabitStore> {
    store: S,
    habits: Vec<Habit>,
    next_seq: u64,
}

impl<S: HabitStore> HabitService<S> {
    /// Create the service and load the current collection from `store`.
    pub fn new(store: S) -> Self {
        let habits = store.load();
        Self {
            store,
            habits,
            next_seq: 1,
        }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn find(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    /// Habits for the given day, in creation order.
    pub fn habits_on(&self, date: NaiveDate) -> Vec<&Habit> {
        habits_on(date, &self.habits)
    }

    /// Validate and append a new habit, then save the whole list.
    ///
    /// An id is generated when the builder does not carry one. A supplied id
    /// that is already taken is rejected.
    pub fn create(&mut self, builder: HabitBuilder) -> Result<&Habit> {
        let builder = if builder.has_id() {
            builder
        } else {
            builder.id(self.generate_id())
        };

        let habit = builder.build().map_err(HabitError::Validation)?;
        if self.find(&habit.id).is_some() {
            return Err(HabitError::Validation(format!(
                "Habit id '{}' already exists",
                habit.id
            )));
        }

        log::info!("Created habit '{}' ({})", habit.title, habit.id);
        self.habits.push(habit);
        self.store.save(&self.habits);

        let index = self.habits.len() - 1;
        Ok(&self.habits[index])
    }

    /// Remove the habit with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != id);

        if self.habits.len() == before {
            log::debug!("Delete requested for unknown habit {}", id);
            return false;
        }

        self.store.save(&self.habits);
        log::info!("Deleted habit {}", id);
        true
    }

    /// Replace the in-memory list with the store's contents.
    pub fn reload(&mut self) {
        self.habits = self.store.load();
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn generate_id(&mut self) -> String {
        let stamp = Local::now().format("%Y%m%d%H%M%S%3f");
        loop {
            let id = format!("{}-{}", stamp, self.next_seq);
            self.next_seq += 1;
            if self.find(&id).is_none() {
                return id;
            }
        }
    }
}
