//! Calendar strip logic.
//! Day-grid generation, single-day selection and week paging, split across
//! focused submodules.

pub mod grid;
pub mod navigation;
pub mod selection;

pub use grid::DayGridGenerator;
pub use navigation::CalendarNavigator;
pub use selection::SelectionController;
