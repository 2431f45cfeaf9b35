//! Mini-calendar navigator
//!
//! The header dropdown used to jump the main view: a day grid with three
//! zoom levels. The date view pages by month, the month view by year, and
//! the year view by twelve years; picking an entry zooms back in one level.

use chrono::{Datelike, Duration, Local, NaiveDate};
use domain::{DomainError, MonthCursor};
use serde::{Deserialize, Serialize};

/// Zoom level of the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PickerView {
    /// Day grid for one month
    #[default]
    Date,
    /// Twelve months of one year
    Month,
    /// Twelve-year span around the displayed year
    Year,
}

/// One cell of the mini-calendar day grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiniDay {
    /// The real calendar date of the cell
    pub date: NaiveDate,
    /// Whether the date belongs to the displayed month (adjacent-month
    /// days render dimmed)
    pub in_month: bool,
    /// Whether the date is the real-world today
    pub is_today: bool,
}

/// Mini-calendar state, independent of the main view's cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiniCalendar {
    month: MonthCursor,
    view: PickerView,
}

impl MiniCalendar {
    /// Open the picker on the given month, in day view
    #[must_use]
    pub const fn new(month: MonthCursor) -> Self {
        Self {
            month,
            view: PickerView::Date,
        }
    }

    /// Displayed month
    #[must_use]
    pub const fn month(&self) -> MonthCursor {
        self.month
    }

    /// Active zoom level
    #[must_use]
    pub const fn view(&self) -> PickerView {
        self.view
    }

    /// Week-aligned run of dates covering the displayed month
    ///
    /// Starts on the Sunday on or before the 1st and ends on the Saturday
    /// on or after the month's last day, so the length is always a multiple
    /// of seven and adjacent-month days fill the edges.
    #[must_use]
    pub fn day_span(&self) -> Vec<MiniDay> {
        let today = Local::now().date_naive();

        let first = self.month.first_of_month();
        let start = first - Duration::days(i64::from(first.weekday().num_days_from_sunday()));

        let last = self
            .month
            .date_of(self.month.days_in_month())
            .unwrap_or(first);
        let end = last + Duration::days(i64::from(6 - last.weekday().num_days_from_sunday()));

        let mut days = Vec::new();
        let mut date = start;
        while date <= end {
            days.push(MiniDay {
                date,
                in_month: self.month.contains(date),
                is_today: date == today,
            });
            date += Duration::days(1);
        }
        days
    }

    /// Month labels for the month view, January first
    #[must_use]
    pub const fn month_names() -> [&'static str; 12] {
        [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ]
    }

    /// Years shown by the year view: six back through five ahead
    #[must_use]
    pub fn year_span(&self) -> Vec<i32> {
        let year = self.month.year();
        (year - 6..=year + 5).collect()
    }

    /// Page backward: a month, a year, or twelve years by view
    pub fn page_back(&mut self) {
        self.month = match self.view {
            PickerView::Date => self.month.prev(),
            PickerView::Month => self.month.shift_years(-1),
            PickerView::Year => self.month.shift_years(-12),
        };
    }

    /// Page forward: a month, a year, or twelve years by view
    pub fn page_forward(&mut self) {
        self.month = match self.view {
            PickerView::Date => self.month.next(),
            PickerView::Month => self.month.shift_years(1),
            PickerView::Year => self.month.shift_years(12),
        };
    }

    /// Zoom out one level (clicking the header label); year view stays put
    pub fn zoom_out(&mut self) {
        self.view = match self.view {
            PickerView::Date => PickerView::Month,
            PickerView::Month | PickerView::Year => PickerView::Year,
        };
    }

    /// Pick a day: returns the date for the main cursor to jump to and
    /// resets the picker to day view on that month
    pub fn select_day(&mut self, date: NaiveDate) -> NaiveDate {
        self.month = MonthCursor::from_date(date);
        self.view = PickerView::Date;
        date
    }

    /// Pick a month (1-12) from the month view, zooming back to days
    pub fn select_month(&mut self, month: u32) -> Result<(), DomainError> {
        self.month = self.month.with_month(month)?;
        self.view = PickerView::Date;
        Ok(())
    }

    /// Pick a year from the year view, zooming in to its months
    pub fn select_year(&mut self, year: i32) -> Result<(), DomainError> {
        self.month = self.month.with_year(year)?;
        self.view = PickerView::Month;
        Ok(())
    }

    /// Header label by view: "May 2025", "2025", or "2019 - 2030"
    #[must_use]
    pub fn title(&self) -> String {
        let year = self.month.year();
        match self.view {
            PickerView::Date => self.month.label(),
            PickerView::Month => year.to_string(),
            PickerView::Year => format!("{} - {}", year - 6, year + 5),
        }
    }
}
