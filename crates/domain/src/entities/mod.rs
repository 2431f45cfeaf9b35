//! Domain entities - Calendar objects with identity and lifecycle

mod appointment;
mod day_event;
mod task;
mod timed_event;

pub use appointment::AppointmentSchedule;
pub use day_event::{DayEvent, DayEventDraft};
pub use task::Task;
pub use timed_event::{DraftEvent, TimedEvent};
