//! Task entity
//!
//! The quick-create menu's "Task" tab: a titled to-do pinned to a time of
//! day. Both title and time are required by the form.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A to-do created from the task form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Short title, never empty
    pub title: String,
    /// Time of day the task is due
    pub time: NaiveTime,
    /// Optional free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Task {
    /// Create a new task
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TitleRequired`] when the title is blank.
    pub fn new(title: impl Into<String>, time: NaiveTime) -> Result<Self, DomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::TitleRequired);
        }
        Ok(Self {
            title,
            time,
            description: None,
        })
    }

    /// Set a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.title, self.time.format("%H:%M"))
    }
}
