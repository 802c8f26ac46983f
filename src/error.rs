//! Error types raised by listener registration.
//!
//! Only caller misuse is an error. Absence (unknown event type, unknown namespace,
//! listener never registered) is always a silent no-op and is visible only through
//! query results such as [`NamespacedEmitter::has_listener`](crate::NamespacedEmitter::has_listener).
//!
//! [`EmitterError`] provides helper methods (`as_label`, `as_message`) for logging.

use thiserror::Error;

/// # Errors produced by an emitter primitive.
///
/// Raised by [`Primitive::add_listener`](crate::Primitive::add_listener) and propagated
/// unchanged through [`NamespacedEmitter`](crate::NamespacedEmitter). When one is
/// returned, the namespace index has **not** been touched.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmitterError {
    /// A listener was registered under an empty event type.
    #[error("event type must be a non-empty string")]
    EmptyEventType,
}

impl EmitterError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use nsemitter::EmitterError;
    ///
    /// assert_eq!(EmitterError::EmptyEventType.as_label(), "emitter_empty_event_type");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EmitterError::EmptyEventType => "emitter_empty_event_type",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EmitterError::EmptyEventType => "empty event type".to_string(),
        }
    }
}
