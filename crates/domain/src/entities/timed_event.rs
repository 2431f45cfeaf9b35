//! Day-panel event entity
//!
//! Events on the day panel's time grid carry real start/end timestamps and
//! must span a positive amount of time. Overlaps are allowed; the panel does
//! no conflict checking.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{errors::DomainError, value_objects::MinuteOfDay};

/// A committed event on the day panel, `end` strictly after `start`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedEvent {
    /// Short title, never empty
    pub title: String,
    /// Optional free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Start timestamp
    pub start: NaiveDateTime,
    /// End timestamp, strictly after `start`
    pub end: NaiveDateTime,
}

impl TimedEvent {
    /// Create a new event, validating title and time range
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TitleRequired`] for a blank title and
    /// [`DomainError::EndNotAfterStart`] when `end <= start`.
    pub fn new(
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::TitleRequired);
        }
        if end <= start {
            return Err(DomainError::EndNotAfterStart);
        }
        Ok(Self {
            title,
            description: None,
            start,
            end,
        })
    }

    /// Set a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Event length in whole minutes
    #[must_use]
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Minutes between the given day's midnight and the event start
    ///
    /// Negative when the event starts before that day; the panel does not
    /// clamp (cross-midnight events are out of scope).
    #[must_use]
    pub fn minutes_from_midnight(&self, day: NaiveDate) -> i64 {
        (self.start - day.and_time(NaiveTime::MIN)).num_minutes()
    }
}

impl fmt::Display for TimedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} - {})", self.title, self.start, self.end)
    }
}

/// An event under construction in the editor
///
/// Held apart from the committed sequence; fields are freely mutable and
/// nothing is validated until [`DraftEvent::finish`]. Discarding a draft
/// mutates nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftEvent {
    pub title: String,
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DraftEvent {
    /// The blank draft the "+ Add New" button opens: 08:00-09:00 on the day
    #[must_use]
    pub fn default_for_day(day: NaiveDate) -> Self {
        let midnight = day.and_time(NaiveTime::MIN);
        Self {
            title: String::new(),
            description: String::new(),
            start: midnight + Duration::hours(8),
            end: midnight + Duration::hours(9),
        }
    }

    /// Draft for a committed drag selection
    ///
    /// `end_minute_exclusive` may be 1440, in which case the draft ends at
    /// midnight of the following day.
    #[must_use]
    pub fn for_range(day: NaiveDate, start: MinuteOfDay, end_minute_exclusive: u32) -> Self {
        let midnight = day.and_time(NaiveTime::MIN);
        Self {
            title: String::new(),
            description: String::new(),
            start: midnight + Duration::minutes(i64::from(start.index())),
            end: midnight + Duration::minutes(i64::from(end_minute_exclusive)),
        }
    }

    /// Pre-fill the editor from an existing event
    #[must_use]
    pub fn from_event(event: &TimedEvent) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            start: event.start,
            end: event.end,
        }
    }

    /// Validate and produce a committed event
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TitleRequired`] or
    /// [`DomainError::EndNotAfterStart`]; the draft itself is untouched
    /// either way.
    pub fn finish(&self) -> Result<TimedEvent, DomainError> {
        let mut event = TimedEvent::new(self.title.clone(), self.start, self.end)?;
        if !self.description.trim().is_empty() {
            event = event.with_description(self.description.clone());
        }
        Ok(event)
    }
}
