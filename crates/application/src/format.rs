//! Display formatting for calendar surfaces
//!
//! The handful of strings the views render: 12-hour time labels, the day
//! panel's header and event tooltips, and the ISO date key the month view
//! uses to address its event map.

use chrono::{NaiveDate, NaiveTime, Timelike};
use domain::TimedEvent;

/// 12-hour clock label, e.g. "9:05 AM"
#[must_use]
pub fn time_12h(time: NaiveTime) -> String {
    let hour = time.hour();
    let h12 = if hour % 12 == 0 { 12 } else { hour % 12 };
    let period = if hour < 12 { "AM" } else { "PM" };
    format!("{h12}:{:02} {period}", time.minute())
}

/// Label for an hour row of the time gutter, e.g. "9:00 AM"
#[must_use]
pub fn hour_label(hour: u32) -> String {
    let h12 = if hour % 12 == 0 { 12 } else { hour % 12 };
    let period = if hour < 12 { "AM" } else { "PM" };
    format!("{h12}:00 {period}")
}

/// Tooltip line for an event, e.g. "Thursday 22 May 9:00 AM – 10:00 AM"
#[must_use]
pub fn event_range(event: &TimedEvent) -> String {
    format!(
        "{} {} – {}",
        event.start.format("%A %-d %B"),
        time_12h(event.start.time()),
        time_12h(event.end.time())
    )
}

/// Day panel header, e.g. "Thursday, May 22, 2025"
#[must_use]
pub fn day_header(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// ISO date key, e.g. "2025-05-22"
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn midnight_is_twelve_am() {
        assert_eq!(time_12h(hm(0, 0)), "12:00 AM");
    }

    #[test]
    fn noon_is_twelve_pm() {
        assert_eq!(time_12h(hm(12, 0)), "12:00 PM");
    }

    #[test]
    fn afternoon_time() {
        assert_eq!(time_12h(hm(16, 5)), "4:05 PM");
    }

    #[test]
    fn hour_labels() {
        assert_eq!(hour_label(0), "12:00 AM");
        assert_eq!(hour_label(9), "9:00 AM");
        assert_eq!(hour_label(12), "12:00 PM");
        assert_eq!(hour_label(23), "11:00 PM");
    }

    #[test]
    fn event_range_line() {
        let day = NaiveDate::from_ymd_opt(2025, 5, 22).unwrap();
        let event = TimedEvent::new(
            "Standup",
            day.and_hms_opt(9, 0, 0).unwrap(),
            day.and_hms_opt(10, 0, 0).unwrap(),
        )
        .unwrap();
        assert_eq!(event_range(&event), "Thursday 22 May 9:00 AM – 10:00 AM");
    }

    #[test]
    fn day_header_line() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 22).unwrap();
        assert_eq!(day_header(date), "Thursday, May 22, 2025");
    }

    #[test]
    fn date_key_is_iso_and_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
        assert_eq!(date_key(date), "2025-05-02");
    }
}
