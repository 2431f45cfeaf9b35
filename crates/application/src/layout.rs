//! Day-panel slot geometry
//!
//! Maps minutes of the day to vertical pixel offsets at a fixed 50 px per
//! hour, the scale the time grid is drawn at. The mapping is linear and
//! stateless; nothing here clamps to the day, so events reaching past
//! midnight simply extend beyond the panel.

use chrono::NaiveDate;
use domain::{MinuteOfDay, TimedEvent};
use serde::{Deserialize, Serialize};

/// Height of one hour row in pixels
pub const HOUR_HEIGHT: f32 = 50.0;

/// Height of one minute cell in pixels
pub const MINUTE_HEIGHT: f32 = HOUR_HEIGHT / 60.0;

/// Hour rows on the panel
pub const HOURS_PER_DAY: u32 = 24;

/// Vertical placement of an event block on the time grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotGeometry {
    /// Offset from the top of the panel, in pixels
    pub top: f32,
    /// Block height, in pixels
    pub height: f32,
}

/// Vertical offset of a minute cell's top edge
#[must_use]
pub fn minute_offset(minute: MinuteOfDay) -> f32 {
    minute.index() as f32 * MINUTE_HEIGHT
}

/// Total panel height: 24 hour rows
#[must_use]
pub const fn panel_height() -> f32 {
    HOURS_PER_DAY as f32 * HOUR_HEIGHT
}

/// Block geometry for an event, relative to the given day's midnight
#[must_use]
pub fn event_geometry(event: &TimedEvent, day: NaiveDate) -> SlotGeometry {
    SlotGeometry {
        top: event.minutes_from_midnight(day) as f32 * MINUTE_HEIGHT,
        height: event.duration_minutes() as f32 * MINUTE_HEIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 22).unwrap()
    }

    fn event(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> TimedEvent {
        TimedEvent::new(
            "Busy",
            day().and_hms_opt(start_h, start_m, 0).unwrap(),
            day().and_hms_opt(end_h, end_m, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn minute_height_is_fifty_per_hour() {
        assert!((MINUTE_HEIGHT - 50.0 / 60.0).abs() < f32::EPSILON);
    }

    #[test]
    fn midnight_offset_is_zero() {
        let m = MinuteOfDay::new(0).unwrap();
        assert!((minute_offset(m)).abs() < f32::EPSILON);
    }

    #[test]
    fn nine_am_offset() {
        let m = MinuteOfDay::new(540).unwrap();
        assert!((minute_offset(m) - 450.0).abs() < 0.001);
    }

    #[test]
    fn offsets_are_linear() {
        let a = MinuteOfDay::new(60).unwrap();
        let b = MinuteOfDay::new(120).unwrap();
        assert!((minute_offset(b) - 2.0 * minute_offset(a)).abs() < 0.001);
    }

    #[test]
    fn one_hour_event_geometry() {
        let geometry = event_geometry(&event(9, 0, 10, 0), day());
        assert!((geometry.top - 450.0).abs() < 0.001);
        assert!((geometry.height - 50.0).abs() < 0.001);
    }

    #[test]
    fn half_hour_event_geometry() {
        let geometry = event_geometry(&event(14, 15, 14, 45), day());
        assert!((geometry.top - 712.5).abs() < 0.001);
        assert!((geometry.height - 25.0).abs() < 0.001);
    }

    #[test]
    fn panel_fits_last_event() {
        let geometry = event_geometry(&event(23, 0, 23, 59), day());
        assert!(geometry.top + geometry.height <= panel_height());
    }

    #[test]
    fn event_on_another_day_offsets_past_panel() {
        let tomorrow = day().succ_opt().unwrap();
        let geometry = event_geometry(&event(1, 0, 2, 0), tomorrow);
        assert!(geometry.top < 0.0);
    }
}
