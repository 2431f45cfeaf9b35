//! Bookable appointment schedule entity
//!
//! The quick-create menu's "Appointment schedule" tab: a daily window during
//! which slots can be booked. The form pre-fills a 09:00-17:00 window.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A bookable daily window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentSchedule {
    /// Short title, never empty
    pub title: String,
    /// Window opens
    pub start_time: NaiveTime,
    /// Window closes, strictly after `start_time`
    pub end_time: NaiveTime,
}

impl AppointmentSchedule {
    /// Create a new schedule, validating title and window
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TitleRequired`] for a blank title and
    /// [`DomainError::EndNotAfterStart`] for a window that does not end
    /// after it starts.
    pub fn new(
        title: impl Into<String>,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::TitleRequired);
        }
        if end_time <= start_time {
            return Err(DomainError::EndNotAfterStart);
        }
        Ok(Self {
            title,
            start_time,
            end_time,
        })
    }

    /// The form's pre-filled window, 09:00-17:00
    #[must_use]
    pub fn default_window() -> (NaiveTime, NaiveTime) {
        (
            NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap_or(NaiveTime::MIN),
        )
    }

    /// Window length in whole minutes
    #[must_use]
    pub fn window_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}

impl fmt::Display for AppointmentSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} - {})",
            self.title,
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}
