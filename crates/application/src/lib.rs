//! Application layer - Calendar view models and services
//!
//! Builds the month grid and mini-calendar from domain types, runs the day
//! panel's drag/edit state machine, and owns the in-memory event stores.
//! Everything here is synchronous: state changes happen on UI callbacks and
//! run to completion.

pub mod drag;
pub mod error;
pub mod format;
pub mod layout;
pub mod mini_calendar;
pub mod month_grid;
pub mod services;

pub use drag::DragSelection;
pub use error::ApplicationError;
pub use mini_calendar::{MiniCalendar, MiniDay, PickerView};
pub use month_grid::{GRID_COLS, GRID_ROWS, MINI_WEEKDAY_HEADERS, MonthGrid, WEEKDAY_HEADERS};
pub use services::*;
