//! Calendar services - stateful sessions over the domain types

mod day_planner;
mod event_book;
mod quick_create;

pub use day_planner::{DayPlanner, EditorSession, PanelState};
pub use event_book::{DayEditor, EventBook};
pub use quick_create::{CreateKind, QuickCreate};
