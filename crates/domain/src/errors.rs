//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required title was empty or whitespace-only
    #[error("Title is required")]
    TitleRequired,

    /// An event or window ended at or before its start
    #[error("End date/time must be after start date/time")]
    EndNotAfterStart,

    /// Minute index outside 0..1440
    #[error("Minute index out of range: {0}")]
    MinuteOutOfRange(u32),

    /// Color string is not a `#rrggbb` hex value
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Month outside 1..=12
    #[error("Invalid month: {0}")]
    InvalidMonth(u32),

    /// Year/month/day combination does not name a real date
    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}
