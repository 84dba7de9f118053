//! Error types for studentlookup
//!
//! All error types use thiserror for clean error handling.
//! SECURITY: Error messages MUST NOT contain secrets.

use std::time::Duration;

/// Outcome of a search that did not resolve a record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Student number and name are both required")]
    MissingInput,

    #[error("No record matches the given student number and name")]
    NotFound,

    #[error("No record matches and the name could not be transliterated (no transliterator configured)")]
    TransliterationUnavailable,
}

/// Errors from clipboard export
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard utility failed: {0}")]
    Fallback(String),

    #[error("Clipboard utility timed out after {0:?}")]
    Timeout(Duration),

    #[error("Clipboard write failed (primary: {primary}; fallback: {fallback})")]
    Exhausted { primary: String, fallback: String },
}

/// Errors from loading the record roster
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Failed to read roster file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse roster file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Roster contains no records")]
    Empty,

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

/// Precondition failures on the query state
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("No record has been looked up yet")]
    NoResult,
}
