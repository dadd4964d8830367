//! Typed errors raised by the pure checking logic.
//!
//! Structural problems are per-record and recoverable (the record is dropped
//! from the batch). Invalid input is a caller bug and always propagates.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// A raw record could not be normalized into a [`MovieRecord`].
///
/// [`MovieRecord`]: crate::core::record::MovieRecord
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' has invalid value: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("field 'title' is empty")]
    EmptyTitle,
}

impl Serialize for StructuralError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// A precondition of a pure helper was violated by its caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("token '{0}' must be a single word without whitespace")]
    Whitespace(String),
}
