//! Domain layer for daygrid
//!
//! Core calendar types: entities, value objects, and domain errors.
//! Pure data and validation; no logging and no orchestration.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
