//! Minute-of-day value object
//!
//! The unit of the day panel's drag selection: an integer 0-1439 identifying
//! one minute within a day, midnight being minute zero.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Number of minutes in one day
pub const MINUTES_PER_DAY: u32 = 1440;

/// A validated minute within a day (0 = 00:00, 1439 = 23:59)
///
/// # Examples
///
/// ```
/// use domain::MinuteOfDay;
///
/// let nine = MinuteOfDay::new(540).unwrap();
/// assert_eq!(nine.hour(), 9);
/// assert_eq!(nine.minute(), 0);
/// assert_eq!(nine.label(), "9:00 AM");
///
/// assert!(MinuteOfDay::new(1440).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct MinuteOfDay(u32);

impl MinuteOfDay {
    /// Create a minute index, validating the range
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MinuteOutOfRange`] for indices past 1439.
    pub fn new(index: u32) -> Result<Self, DomainError> {
        if index >= MINUTES_PER_DAY {
            return Err(DomainError::MinuteOutOfRange(index));
        }
        Ok(Self(index))
    }

    /// Create from an hour/minute pair
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, DomainError> {
        if minute >= 60 {
            return Err(DomainError::MinuteOutOfRange(hour * 60 + minute));
        }
        Self::new(hour * 60 + minute)
    }

    /// The raw index, 0..1440
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Hour component, 0..24
    #[must_use]
    pub const fn hour(self) -> u32 {
        self.0 / 60
    }

    /// Minute-within-hour component, 0..60
    #[must_use]
    pub const fn minute(self) -> u32 {
        self.0 % 60
    }

    /// Whether this is the last minute of its hour row
    #[must_use]
    pub const fn is_hour_end(self) -> bool {
        self.0 % 60 == 59
    }

    /// Convert to a wall-clock time
    #[must_use]
    pub fn to_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or(NaiveTime::MIN)
    }

    /// 12-hour clock label, e.g. "9:05 AM"
    #[must_use]
    pub fn label(self) -> String {
        let hour = self.hour();
        let h12 = if hour % 12 == 0 { 12 } else { hour % 12 };
        let period = if hour < 12 { "AM" } else { "PM" };
        format!("{h12}:{:02} {period}", self.minute())
    }

    /// Label on quarter-hour boundaries only; the time gutter leaves the
    /// remaining slots blank
    #[must_use]
    pub fn quarter_label(self) -> Option<String> {
        (self.minute() % 15 == 0).then(|| self.label())
    }
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
