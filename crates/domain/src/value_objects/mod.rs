//! Value Objects - Immutable, identity-less calendar primitives

mod event_color;
mod minute_of_day;
mod month_cursor;

pub use event_color::EventColor;
pub use minute_of_day::{MINUTES_PER_DAY, MinuteOfDay};
pub use month_cursor::MonthCursor;
