//! Day-panel planner
//!
//! Drives the single-day time grid: an idle panel, an in-progress drag
//! sweep, or an open editor for a new or existing event. Exactly one of
//! these holds at a time, so the panel state is a plain enum.

use chrono::NaiveDate;
use domain::{DraftEvent, MinuteOfDay, TimedEvent};
use tracing::{debug, info, instrument};

use crate::{
    drag::DragSelection,
    error::ApplicationError,
    layout::{self, SlotGeometry},
};

/// Editor session for one draft, either new or pointing at a stored event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    /// The form's current field values
    pub draft: DraftEvent,
    edit_index: Option<usize>,
}

/// What the panel is currently doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState {
    /// Nothing in progress
    Idle,
    /// Pointer is down and sweeping minute cells
    Dragging(DragSelection),
    /// The event form is open
    Editing(EditorSession),
}

/// One day's time grid with its events and interaction state
#[derive(Debug)]
pub struct DayPlanner {
    day: NaiveDate,
    events: Vec<TimedEvent>,
    state: PanelState,
}

impl DayPlanner {
    /// Create an empty planner for the given day
    #[must_use]
    pub const fn new(day: NaiveDate) -> Self {
        Self {
            day,
            events: Vec::new(),
            state: PanelState::Idle,
        }
    }

    /// The day this panel shows
    #[must_use]
    pub const fn day(&self) -> NaiveDate {
        self.day
    }

    /// The stored events, in insertion order
    #[must_use]
    pub fn events(&self) -> &[TimedEvent] {
        &self.events
    }

    /// The current panel state
    #[must_use]
    pub const fn state(&self) -> &PanelState {
        &self.state
    }

    /// Pointer down on a minute cell; starts a drag from an idle panel
    pub fn press(&mut self, minute: MinuteOfDay) {
        if matches!(self.state, PanelState::Idle) {
            debug!(minute = minute.index(), "Starting drag");
            self.state = PanelState::Dragging(DragSelection::start(minute));
        }
    }

    /// Pointer entered a minute cell; extends an in-progress drag
    pub fn drag_over(&mut self, minute: MinuteOfDay) {
        if let PanelState::Dragging(selection) = &mut self.state {
            selection.extend(minute);
        }
    }

    /// Pointer up; commits the swept range into an open editor
    pub fn release(&mut self) {
        if let PanelState::Dragging(selection) = &self.state {
            let (start, end) = selection.minute_range();
            debug!(start = start.index(), end, "Committing drag");
            self.state = PanelState::Editing(EditorSession {
                draft: DraftEvent::for_range(self.day, start, end),
                edit_index: None,
            });
        }
    }

    /// Whether the minute cell lies inside the current drag sweep
    #[must_use]
    pub fn is_selected(&self, minute: MinuteOfDay) -> bool {
        match &self.state {
            PanelState::Dragging(selection) => selection.covers(minute),
            _ => false,
        }
    }

    /// Open the form with the default morning slot
    pub fn open_blank_editor(&mut self) {
        self.state = PanelState::Editing(EditorSession {
            draft: DraftEvent::default_for_day(self.day),
            edit_index: None,
        });
    }

    /// Open the form pre-filled from a stored event
    pub fn open_event(&mut self, index: usize) -> Result<(), ApplicationError> {
        let event = self
            .events
            .get(index)
            .ok_or(ApplicationError::UnknownEvent(index))?;
        self.state = PanelState::Editing(EditorSession {
            draft: DraftEvent::from_event(event),
            edit_index: Some(index),
        });
        Ok(())
    }

    /// The open form's draft, if any
    #[must_use]
    pub const fn draft(&self) -> Option<&DraftEvent> {
        match &self.state {
            PanelState::Editing(session) => Some(&session.draft),
            _ => None,
        }
    }

    /// Mutable draft access for form field updates
    pub const fn draft_mut(&mut self) -> Option<&mut DraftEvent> {
        match &mut self.state {
            PanelState::Editing(session) => Some(&mut session.draft),
            _ => None,
        }
    }

    /// Index of the event being edited, if the form targets a stored one
    #[must_use]
    pub const fn editing_index(&self) -> Option<usize> {
        match &self.state {
            PanelState::Editing(session) => session.edit_index,
            _ => None,
        }
    }

    /// Validate the form and store the event
    ///
    /// New drafts are appended; edits replace the event in place. On
    /// validation failure the form stays open with its input intact.
    #[instrument(skip(self))]
    pub fn save(&mut self) -> Result<(), ApplicationError> {
        let PanelState::Editing(session) = &self.state else {
            return Err(ApplicationError::EditorClosed);
        };
        let event = session.draft.finish()?;

        match session.edit_index {
            Some(index) => {
                let slot = self
                    .events
                    .get_mut(index)
                    .ok_or(ApplicationError::UnknownEvent(index))?;
                info!(index, title = %event.title, "Updating event");
                *slot = event;
            }
            None => {
                info!(title = %event.title, "Adding event");
                self.events.push(event);
            }
        }
        self.state = PanelState::Idle;
        Ok(())
    }

    /// Remove the event the open form points at
    #[instrument(skip(self))]
    pub fn delete(&mut self) -> Result<(), ApplicationError> {
        let PanelState::Editing(session) = &self.state else {
            return Err(ApplicationError::EditorClosed);
        };
        let index = session
            .edit_index
            .ok_or(ApplicationError::NoEventSelected)?;
        if index >= self.events.len() {
            return Err(ApplicationError::UnknownEvent(index));
        }

        info!(index, "Deleting event");
        self.events.remove(index);
        self.state = PanelState::Idle;
        Ok(())
    }

    /// Close the form or abandon a drag without saving
    pub fn cancel(&mut self) {
        self.state = PanelState::Idle;
    }

    /// Vertical placement of an event block on this day's grid
    #[must_use]
    pub fn geometry_of(&self, event: &TimedEvent) -> SlotGeometry {
        layout::event_geometry(event, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 22).unwrap()
    }

    fn minute(index: u32) -> MinuteOfDay {
        MinuteOfDay::new(index).unwrap()
    }

    fn planner_with_event(title: &str, start_h: u32, end_h: u32) -> DayPlanner {
        let mut planner = DayPlanner::new(day());
        planner.open_blank_editor();
        let draft = planner.draft_mut().unwrap();
        draft.title = title.to_string();
        draft.start = day().and_hms_opt(start_h, 0, 0).unwrap();
        draft.end = day().and_hms_opt(end_h, 0, 0).unwrap();
        planner.save().unwrap();
        planner
    }

    #[test]
    fn new_planner_is_idle() {
        let planner = DayPlanner::new(day());
        assert!(matches!(planner.state(), PanelState::Idle));
        assert!(planner.events().is_empty());
    }

    #[test]
    fn drag_nine_to_ten_produces_hour_draft() {
        let mut planner = DayPlanner::new(day());
        planner.press(minute(540));
        planner.drag_over(minute(599));
        planner.release();

        let draft = planner.draft().unwrap();
        assert_eq!(draft.start, day().and_hms_opt(9, 0, 0).unwrap());
        assert_eq!(draft.end, day().and_hms_opt(10, 0, 0).unwrap());
        assert_eq!(planner.editing_index(), None);
    }

    #[test]
    fn backward_drag_produces_same_draft() {
        let mut planner = DayPlanner::new(day());
        planner.press(minute(599));
        planner.drag_over(minute(540));
        planner.release();

        let draft = planner.draft().unwrap();
        assert_eq!(draft.start, day().and_hms_opt(9, 0, 0).unwrap());
        assert_eq!(draft.end, day().and_hms_opt(10, 0, 0).unwrap());
    }

    #[test]
    fn selection_highlights_only_swept_cells() {
        let mut planner = DayPlanner::new(day());
        planner.press(minute(540));
        planner.drag_over(minute(550));

        assert!(planner.is_selected(minute(540)));
        assert!(planner.is_selected(minute(550)));
        assert!(!planner.is_selected(minute(551)));
    }

    #[test]
    fn press_ignored_while_editing() {
        let mut planner = DayPlanner::new(day());
        planner.open_blank_editor();
        planner.press(minute(100));
        assert!(matches!(planner.state(), PanelState::Editing(_)));
    }

    #[test]
    fn blank_editor_defaults_to_morning_slot() {
        let mut planner = DayPlanner::new(day());
        planner.open_blank_editor();

        let draft = planner.draft().unwrap();
        assert_eq!(draft.start, day().and_hms_opt(8, 0, 0).unwrap());
        assert_eq!(draft.end, day().and_hms_opt(9, 0, 0).unwrap());
    }

    #[test]
    fn save_appends_new_event_and_returns_to_idle() {
        let planner = planner_with_event("Standup", 9, 10);
        assert_eq!(planner.events().len(), 1);
        assert_eq!(planner.events()[0].title, "Standup");
        assert!(matches!(planner.state(), PanelState::Idle));
    }

    #[test]
    fn save_empty_title_rejected_form_stays_open() {
        let mut planner = DayPlanner::new(day());
        planner.open_blank_editor();

        let err = planner.save().unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(domain::DomainError::TitleRequired)
        ));
        assert!(planner.events().is_empty());
        assert!(planner.draft().is_some());
    }

    #[test]
    fn save_end_equal_to_start_rejected() {
        let mut planner = DayPlanner::new(day());
        planner.open_blank_editor();
        let draft = planner.draft_mut().unwrap();
        draft.title = "Zero".to_string();
        draft.end = draft.start;

        assert!(matches!(
            planner.save(),
            Err(ApplicationError::Domain(
                domain::DomainError::EndNotAfterStart
            ))
        ));
        assert!(planner.events().is_empty());
    }

    #[test]
    fn save_one_minute_event_accepted() {
        let mut planner = DayPlanner::new(day());
        planner.open_blank_editor();
        let draft = planner.draft_mut().unwrap();
        draft.title = "Blink".to_string();
        draft.end = draft.start + chrono::Duration::minutes(1);

        planner.save().unwrap();
        assert_eq!(planner.events().len(), 1);
        assert_eq!(planner.events()[0].duration_minutes(), 1);
    }

    #[test]
    fn save_without_editor_rejected() {
        let mut planner = DayPlanner::new(day());
        assert!(matches!(
            planner.save(),
            Err(ApplicationError::EditorClosed)
        ));
    }

    #[test]
    fn editing_replaces_only_the_targeted_event() {
        let mut planner = planner_with_event("First", 9, 10);
        planner.open_blank_editor();
        let draft = planner.draft_mut().unwrap();
        draft.title = "Second".to_string();
        draft.start = day().and_hms_opt(11, 0, 0).unwrap();
        draft.end = day().and_hms_opt(12, 0, 0).unwrap();
        planner.save().unwrap();

        planner.open_event(0).unwrap();
        assert_eq!(planner.editing_index(), Some(0));
        planner.draft_mut().unwrap().title = "First (moved)".to_string();
        planner.save().unwrap();

        assert_eq!(planner.events().len(), 2);
        assert_eq!(planner.events()[0].title, "First (moved)");
        assert_eq!(planner.events()[1].title, "Second");
    }

    #[test]
    fn open_event_prefills_the_draft() {
        let mut planner = planner_with_event("Standup", 9, 10);
        planner.open_event(0).unwrap();

        let draft = planner.draft().unwrap();
        assert_eq!(draft.title, "Standup");
        assert_eq!(draft.start, day().and_hms_opt(9, 0, 0).unwrap());
    }

    #[test]
    fn open_event_out_of_range_rejected() {
        let mut planner = DayPlanner::new(day());
        assert!(matches!(
            planner.open_event(3),
            Err(ApplicationError::UnknownEvent(3))
        ));
    }

    #[test]
    fn delete_removes_exactly_the_edited_event() {
        let mut planner = planner_with_event("First", 9, 10);
        planner.open_blank_editor();
        let draft = planner.draft_mut().unwrap();
        draft.title = "Second".to_string();
        draft.start = day().and_hms_opt(11, 0, 0).unwrap();
        draft.end = day().and_hms_opt(12, 0, 0).unwrap();
        planner.save().unwrap();

        planner.open_event(0).unwrap();
        planner.delete().unwrap();

        assert_eq!(planner.events().len(), 1);
        assert_eq!(planner.events()[0].title, "Second");
        assert!(matches!(planner.state(), PanelState::Idle));
    }

    #[test]
    fn delete_requires_a_stored_event() {
        let mut planner = DayPlanner::new(day());
        planner.open_blank_editor();
        assert!(matches!(
            planner.delete(),
            Err(ApplicationError::NoEventSelected)
        ));
    }

    #[test]
    fn cancel_abandons_the_draft() {
        let mut planner = DayPlanner::new(day());
        planner.open_blank_editor();
        planner.cancel();
        assert!(matches!(planner.state(), PanelState::Idle));
        assert!(planner.events().is_empty());
    }

    #[test]
    fn geometry_follows_the_panel_scale() {
        let planner = planner_with_event("Standup", 9, 10);
        let geometry = planner.geometry_of(&planner.events()[0]);
        assert!((geometry.top - 450.0).abs() < 0.001);
        assert!((geometry.height - 50.0).abs() < 0.001);
    }
}
