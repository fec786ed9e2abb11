//! Error types for logvocab core operations.
//!
//! The formatters in [`crate::vocab`] never fail. Errors only arise when an
//! already rendered event string is read back, or when a record is
//! serialized.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when working with rendered events and records.
#[derive(Error, Debug)]
pub enum Error {
    /// The event kind is not part of the vocabulary.
    #[error("Unknown event kind: {kind}")]
    UnknownKind {
        /// The unrecognised kind literal.
        kind: String,
    },

    /// The event string has no `:` between kind and fields.
    #[error("Event string has no kind separator: {event}")]
    MissingSeparator {
        /// The offending event string.
        event: String,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
