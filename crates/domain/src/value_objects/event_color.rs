//! Event color value object with validation
//!
//! A `#rrggbb` hex color as produced by a color picker input. Values are
//! normalized to lowercase.
//!
//! # Examples
//!
//! ```
//! use domain::EventColor;
//!
//! let color = EventColor::new("#FF8800").unwrap();
//! assert_eq!(color.as_str(), "#ff8800");
//!
//! assert!(EventColor::new("red").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated `#rrggbb` event color
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventColor(String);

/// The picker's initial swatch
const DEFAULT_COLOR: &str = "#0d6efd";

impl EventColor {
    /// Create a new color, validating the `#rrggbb` format
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidColor`] when the value is not a `#`
    /// followed by six hex digits.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_lowercase();

        let mut chars = value.chars();
        let well_formed = chars.next() == Some('#')
            && value.len() == 7
            && chars.all(|c| c.is_ascii_hexdigit());

        if !well_formed {
            return Err(DomainError::InvalidColor(value));
        }

        Ok(Self(value))
    }

    /// Get the color as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EventColor {
    fn default() -> Self {
        Self(DEFAULT_COLOR.to_string())
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
