//! Month cursor value object
//!
//! The month currently displayed by a calendar view. Navigation moves the
//! cursor whole months (or years, in the mini-calendar pickers); the grid
//! builder reads day counts and the starting weekday from it.

use std::fmt;

use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// The year/month a calendar view is showing
///
/// Internally pinned to the first day of the month, the way the original
/// view keeps its cursor normalized.
///
/// # Examples
///
/// ```
/// use domain::MonthCursor;
///
/// let may = MonthCursor::new(2025, 5).unwrap();
/// assert_eq!(may.days_in_month(), 31);
/// assert_eq!(may.start_weekday(), 4); // May 1st 2025 is a Thursday
/// assert_eq!(may.label(), "May 2025");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    /// Create a cursor for the given year and month (1-12)
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidMonth`] for months outside 1..=12 and
    /// [`DomainError::InvalidDate`] for years outside the supported range.
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidMonth(month));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or(DomainError::InvalidDate {
                year,
                month,
                day: 1,
            })
    }

    /// Cursor for the current real-world month
    #[must_use]
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Cursor for the month containing the given date
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// Displayed year
    #[must_use]
    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Displayed month, 1-12
    #[must_use]
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// First day of the displayed month
    #[must_use]
    pub const fn first_of_month(&self) -> NaiveDate {
        self.first
    }

    /// Move one month back, wrapping the year
    #[must_use]
    pub fn prev(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map_or(self, |first| Self { first })
    }

    /// Move one month forward, wrapping the year
    #[must_use]
    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map_or(self, |first| Self { first })
    }

    /// Move whole years, keeping the month (mini-calendar paging)
    #[must_use]
    pub fn shift_years(self, years: i32) -> Self {
        Self::new(self.year() + years, self.month()).unwrap_or(self)
    }

    /// Same month in another year
    pub fn with_year(self, year: i32) -> Result<Self, DomainError> {
        Self::new(year, self.month())
    }

    /// Another month in the same year
    pub fn with_month(self, month: u32) -> Result<Self, DomainError> {
        Self::new(self.year(), month)
    }

    /// Number of days in the displayed month, leap years included
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        self.first
            .checked_add_months(Months::new(1))
            .and_then(|next_first| next_first.pred_opt())
            .map_or(31, |last| last.day())
    }

    /// Day of week of the 1st: 0 = Sunday .. 6 = Saturday
    #[must_use]
    pub fn start_weekday(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    /// Date of the given day-of-month, when it exists in this month
    #[must_use]
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        if day == 0 || day > self.days_in_month() {
            return None;
        }
        self.first.with_day(day)
    }

    /// Whether the date falls inside the displayed month
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Header label, e.g. "May 2025"
    #[must_use]
    pub fn label(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

impl Default for MonthCursor {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
