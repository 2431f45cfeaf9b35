//! Month-view event book
//!
//! Holds the month view's events, at most one per date, together with the
//! modal editor session for the clicked day. Date-sorted iteration for the
//! All-Events listing falls out of the map order.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use domain::{DayEvent, DayEventDraft};
use tracing::{debug, info, instrument};

use crate::error::ApplicationError;

/// Editor session for one clicked date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEditor {
    date: NaiveDate,
    /// The form's current field values
    pub input: DayEventDraft,
    editing: bool,
    confirm_delete: bool,
}

impl DayEditor {
    /// The date the editor was opened on
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Whether the session started from an existing event
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    /// Whether the delete confirmation is showing
    #[must_use]
    pub const fn delete_requested(&self) -> bool {
        self.confirm_delete
    }
}

/// The month view's event store and editor
#[derive(Debug, Default)]
pub struct EventBook {
    events: BTreeMap<NaiveDate, DayEvent>,
    editor: Option<DayEditor>,
}

impl EventBook {
    /// Create an empty book
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the editor for a date, pre-filled when an event exists there
    #[instrument(skip(self))]
    pub fn open_day(&mut self, date: NaiveDate) {
        let (input, editing) = self.events.get(&date).map_or_else(
            || (DayEventDraft::default(), false),
            |event| (DayEventDraft::from_event(event), true),
        );
        debug!(%date, editing, "Opening day editor");
        self.editor = Some(DayEditor {
            date,
            input,
            editing,
            confirm_delete: false,
        });
    }

    /// The open editor session, if any
    #[must_use]
    pub const fn editor(&self) -> Option<&DayEditor> {
        self.editor.as_ref()
    }

    /// Mutable editor access for form field updates
    pub const fn editor_mut(&mut self) -> Option<&mut DayEditor> {
        self.editor.as_mut()
    }

    /// Validate the form and upsert the event at the session's date
    ///
    /// On validation failure the editor stays open and the store is
    /// untouched.
    #[instrument(skip(self))]
    pub fn save(&mut self) -> Result<(), ApplicationError> {
        let editor = self.editor.as_ref().ok_or(ApplicationError::EditorClosed)?;
        let event = editor.input.finish()?;

        info!(date = %editor.date, title = %event.title, "Saving day event");
        self.events.insert(editor.date, event);
        self.editor = None;
        Ok(())
    }

    /// Show the delete confirmation; only meaningful while editing
    pub fn request_delete(&mut self) -> Result<(), ApplicationError> {
        match self.editor.as_mut() {
            Some(editor) if editor.editing => {
                editor.confirm_delete = true;
                Ok(())
            }
            Some(_) => Err(ApplicationError::NoEventSelected),
            None => Err(ApplicationError::EditorClosed),
        }
    }

    /// Dismiss the delete confirmation, keeping the editor open
    pub fn cancel_delete(&mut self) {
        if let Some(editor) = self.editor.as_mut() {
            editor.confirm_delete = false;
        }
    }

    /// Remove the session date's event and close the editor
    #[instrument(skip(self))]
    pub fn confirm_delete(&mut self) -> Result<(), ApplicationError> {
        let editor = self.editor.as_ref().ok_or(ApplicationError::EditorClosed)?;
        if !editor.editing {
            return Err(ApplicationError::NoEventSelected);
        }

        info!(date = %editor.date, "Deleting day event");
        self.events.remove(&editor.date);
        self.editor = None;
        Ok(())
    }

    /// Close the editor without saving
    pub fn cancel(&mut self) {
        self.editor = None;
    }

    /// Event on the given date, if any
    #[must_use]
    pub fn event_on(&self, date: NaiveDate) -> Option<&DayEvent> {
        self.events.get(&date)
    }

    /// Number of stored events
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the book holds no events
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in ascending date order
    pub fn all_events(&self) -> impl Iterator<Item = (NaiveDate, &DayEvent)> + '_ {
        self.events.iter().map(|(date, event)| (*date, event))
    }
}
