//! Drag-to-create selection state
//!
//! The original panel tracked a drag with three independent nullable flags;
//! here the selection is a single value that only exists while a drag is in
//! progress, so no invalid flag combination can be represented.

use domain::MinuteOfDay;
use serde::{Deserialize, Serialize};

/// An in-progress sweep over the day panel's minute cells
///
/// `anchor` is pinned where the pointer went down; `cursor` follows the
/// pointer and may sit on either side of the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSelection {
    anchor: MinuteOfDay,
    cursor: MinuteOfDay,
}

impl DragSelection {
    /// Begin a drag at the pressed minute cell
    #[must_use]
    pub const fn start(minute: MinuteOfDay) -> Self {
        Self {
            anchor: minute,
            cursor: minute,
        }
    }

    /// Move the free end to the minute cell the pointer entered
    pub fn extend(&mut self, minute: MinuteOfDay) {
        self.cursor = minute;
    }

    /// The minute where the drag began
    #[must_use]
    pub const fn anchor(&self) -> MinuteOfDay {
        self.anchor
    }

    /// Whether the cell should render highlighted
    #[must_use]
    pub fn covers(&self, minute: MinuteOfDay) -> bool {
        let lo = self.anchor.min(self.cursor);
        let hi = self.anchor.max(self.cursor);
        (lo..=hi).contains(&minute)
    }

    /// The committed range on release: start minute plus exclusive end index
    ///
    /// The end is one past the last swept minute, so a drag over 9:00-9:59
    /// yields the full hour 540..600. The exclusive end may be 1440.
    #[must_use]
    pub fn minute_range(&self) -> (MinuteOfDay, u32) {
        let lo = self.anchor.min(self.cursor);
        let hi = self.anchor.max(self.cursor);
        (lo, hi.index() + 1)
    }
}
