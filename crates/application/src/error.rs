//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level validation failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// An operation needed an open editor session
    #[error("Editor is not open")]
    EditorClosed,

    /// Delete requested while no existing event is being edited
    #[error("No event is selected")]
    NoEventSelected,

    /// Event index no longer present in the sequence
    #[error("No event at index {0}")]
    UnknownEvent(usize),
}
