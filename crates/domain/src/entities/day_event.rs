//! Month-view event entity
//!
//! The month grid shows at most one event per date, keyed by the date it is
//! attached to. The key lives in the store, not here.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::{errors::DomainError, value_objects::EventColor};

/// An event pinned to a single calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEvent {
    /// Short title, never empty
    pub title: String,
    /// Optional start-of-day time shown next to the title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    /// Optional free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional free-form location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Display color for the grid chip
    pub color: EventColor,
}

impl DayEvent {
    /// Create a new event with the default color
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TitleRequired`] when the title is blank.
    pub fn new(title: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::TitleRequired);
        }
        Ok(Self {
            title,
            time: None,
            description: None,
            location: None,
            color: EventColor::default(),
        })
    }

    /// Set the displayed time
    #[must_use]
    pub const fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Set a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a location
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the display color
    #[must_use]
    pub fn with_color(mut self, color: EventColor) -> Self {
        self.color = color;
        self
    }
}

impl fmt::Display for DayEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Form input for a [`DayEvent`], valid only once finished
///
/// Mirrors the editor modal: every field is freely editable, empty strings
/// mean "unset", and nothing is validated until save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEventDraft {
    pub title: String,
    pub time: Option<NaiveTime>,
    pub description: String,
    pub location: String,
    pub color: EventColor,
}

impl DayEventDraft {
    /// Pre-fill the form from an existing event
    #[must_use]
    pub fn from_event(event: &DayEvent) -> Self {
        Self {
            title: event.title.clone(),
            time: event.time,
            description: event.description.clone().unwrap_or_default(),
            location: event.location.clone().unwrap_or_default(),
            color: event.color.clone(),
        }
    }

    /// Validate the input and produce a committed event
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TitleRequired`] when the title is blank.
    pub fn finish(&self) -> Result<DayEvent, DomainError> {
        let mut event = DayEvent::new(self.title.clone())?.with_color(self.color.clone());
        event.time = self.time;
        if !self.description.trim().is_empty() {
            event = event.with_description(self.description.clone());
        }
        if !self.location.trim().is_empty() {
            event = event.with_location(self.location.clone());
        }
        Ok(event)
    }
}

impl Default for DayEventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            time: None,
            description: String::new(),
            location: String::new(),
            color: EventColor::default(),
        }
    }
}
