//! Month grid builder
//!
//! Turns a [`MonthCursor`] into the fixed 6x7 matrix of day cells that both
//! the month view and the mini-calendar render. Leading cells before the 1st
//! and trailing cells past the month's end are empty.

use chrono::{Datelike, NaiveDate};
use domain::MonthCursor;
use serde::{Deserialize, Serialize};

/// Rows in every month grid, even for months that fit in five
pub const GRID_ROWS: usize = 6;

/// Columns in every month grid, Sunday through Saturday
pub const GRID_COLS: usize = 7;

/// Column headers for the month view
pub const WEEKDAY_HEADERS: [&str; GRID_COLS] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Single-letter column headers for the mini-calendar
pub const MINI_WEEKDAY_HEADERS: [&str; GRID_COLS] = ["S", "M", "T", "W", "T", "F", "S"];

/// A built month grid: 6 rows of 7 optional day-of-month numbers
///
/// # Examples
///
/// ```
/// use application::MonthGrid;
/// use domain::MonthCursor;
///
/// // May 2025 starts on a Thursday.
/// let grid = MonthGrid::build(MonthCursor::new(2025, 5).unwrap());
/// assert_eq!(
///     grid.rows()[0],
///     [None, None, None, None, Some(1), Some(2), Some(3)]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    cursor: MonthCursor,
    rows: [[Option<u32>; GRID_COLS]; GRID_ROWS],
}

impl MonthGrid {
    /// Build the grid for the cursor's month
    #[must_use]
    pub fn build(cursor: MonthCursor) -> Self {
        let days = i64::from(cursor.days_in_month());
        let mut rows = [[None; GRID_COLS]; GRID_ROWS];

        // Walk cells row-major, counting up from `1 - start_weekday` so the
        // 1st lands in its weekday column, exactly like the original loop.
        let mut day = 1 - i64::from(cursor.start_weekday());
        for row in &mut rows {
            for cell in row.iter_mut() {
                if (1..=days).contains(&day) {
                    *cell = u32::try_from(day).ok();
                }
                day += 1;
            }
        }

        Self { cursor, rows }
    }

    /// The month this grid was built for
    #[must_use]
    pub const fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    /// All rows, in display order
    #[must_use]
    pub const fn rows(&self) -> &[[Option<u32>; GRID_COLS]; GRID_ROWS] {
        &self.rows
    }

    /// Day number at the given cell; `None` for blanks or out-of-grid
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<u32> {
        self.rows.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Calendar date at the given cell, when the cell holds a day
    #[must_use]
    pub fn date_at(&self, row: usize, col: usize) -> Option<NaiveDate> {
        self.cell(row, col).and_then(|day| self.cursor.date_of(day))
    }

    /// Present day numbers in row-major order
    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.iter().flatten().filter_map(|cell| *cell)
    }

    /// Grid position of a day-of-month
    #[must_use]
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        if day == 0 || day > self.cursor.days_in_month() {
            return None;
        }
        let index = self.cursor.start_weekday() as usize + day as usize - 1;
        Some((index / GRID_COLS, index % GRID_COLS))
    }

    /// Grid position of a calendar date, when it falls in this month
    #[must_use]
    pub fn position_of_date(&self, date: NaiveDate) -> Option<(usize, usize)> {
        self.cursor
            .contains(date)
            .then(|| self.position_of(date.day()))
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(year: i32, month: u32) -> MonthGrid {
        MonthGrid::build(MonthCursor::new(year, month).unwrap())
    }

    #[test]
    fn always_six_rows_of_seven() {
        let g = grid(2025, 5);
        assert_eq!(g.rows().len(), 6);
        assert!(g.rows().iter().all(|row| row.len() == 7));
    }

    #[test]
    fn may_2025_first_row() {
        // May 1st 2025 is a Thursday (column 4).
        let g = grid(2025, 5);
        assert_eq!(
            g.rows()[0],
            [None, None, None, None, Some(1), Some(2), Some(3)]
        );
    }

    #[test]
    fn days_are_ascending_and_complete() {
        let g = grid(2025, 5);
        let days: Vec<u32> = g.days().collect();
        assert_eq!(days, (1..=31).collect::<Vec<u32>>());
    }

    #[test]
    fn leap_february_has_29_days() {
        let g = grid(2024, 2);
        assert_eq!(g.days().count(), 29);
        assert_eq!(g.days().last(), Some(29));
    }

    #[test]
    fn non_leap_february_has_28_days() {
        let g = grid(2023, 2);
        assert_eq!(g.days().count(), 28);
    }

    #[test]
    fn sixth_row_may_be_entirely_empty() {
        // February 2026 starts on a Sunday and fits in four rows; the fixed
        // layout still emits rows five and six.
        let g = grid(2026, 2);
        assert!(g.rows()[4].iter().all(Option::is_none));
        assert!(g.rows()[5].iter().all(Option::is_none));
    }

    #[test]
    fn month_spanning_six_rows() {
        // August 2026 starts on a Saturday and has 31 days: 31 + 6 leading
        // blanks needs all six rows.
        let g = grid(2026, 8);
        assert_eq!(g.rows()[5][0], Some(30));
        assert_eq!(g.rows()[5][1], Some(31));
    }

    #[test]
    fn cell_out_of_bounds_is_none() {
        let g = grid(2025, 5);
        assert!(g.cell(6, 0).is_none());
        assert!(g.cell(0, 7).is_none());
    }

    #[test]
    fn date_at_maps_to_calendar_date() {
        let g = grid(2025, 5);
        assert_eq!(
            g.date_at(0, 4),
            NaiveDate::from_ymd_opt(2025, 5, 1)
        );
        assert!(g.date_at(0, 0).is_none());
    }

    #[test]
    fn position_of_first_day() {
        let g = grid(2025, 5);
        assert_eq!(g.position_of(1), Some((0, 4)));
    }

    #[test]
    fn position_of_roundtrips_through_cell() {
        let g = grid(2025, 5);
        for day in 1..=31 {
            let (row, col) = g.position_of(day).unwrap();
            assert_eq!(g.cell(row, col), Some(day));
        }
    }

    #[test]
    fn position_of_invalid_day_is_none() {
        let g = grid(2023, 2);
        assert!(g.position_of(0).is_none());
        assert!(g.position_of(29).is_none());
    }

    #[test]
    fn position_of_date_checks_month() {
        let g = grid(2025, 5);
        let in_month = NaiveDate::from_ymd_opt(2025, 5, 22).unwrap();
        let other_month = NaiveDate::from_ymd_opt(2025, 6, 22).unwrap();
        assert_eq!(g.position_of_date(in_month), Some((3, 4)));
        assert!(g.position_of_date(other_month).is_none());
    }

    #[test]
    fn headers_have_seven_columns() {
        assert_eq!(WEEKDAY_HEADERS.len(), 7);
        assert_eq!(MINI_WEEKDAY_HEADERS.len(), 7);
        assert_eq!(WEEKDAY_HEADERS[0], "SUN");
        assert_eq!(WEEKDAY_HEADERS[6], "SAT");
    }

    #[test]
    fn serialization_roundtrip() {
        let g = grid(2025, 5);
        let json = serde_json::to_string(&g).unwrap();
        let parsed: MonthGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, g);
    }
}
