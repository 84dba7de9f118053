//! Query state owned by the form controller
//!
//! Every transition consumes the previous state and returns the next one, so
//! handlers never mutate shared state in place.

use crate::models::Record;
use crate::utils::StateError;

/// What the result region shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub login_id: String,
    /// Masked placeholder or the plaintext secret, depending on the reveal flag
    pub secret: String,
    pub revealed: bool,
}

/// Last resolved record plus the reveal flag
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    found: Option<Record>,
    revealed: bool,
}

impl QueryState {
    /// Empty state: no record, secret masked
    pub fn cleared() -> Self {
        Self::default()
    }

    /// State after a successful lookup; the secret always starts masked
    pub fn resolved(record: Record) -> Self {
        Self {
            found: Some(record),
            revealed: false,
        }
    }

    /// Flip the reveal flag. Requires a resolved record.
    pub fn toggled(self) -> Result<Self, StateError> {
        if self.found.is_none() {
            return Err(StateError::NoResult);
        }
        Ok(Self {
            revealed: !self.revealed,
            ..self
        })
    }

    pub fn record(&self) -> Option<&Record> {
        self.found.as_ref()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn has_result(&self) -> bool {
        self.found.is_some()
    }

    /// Render the result region, or `None` when it should be hidden
    pub fn view(&self) -> Option<ResultView> {
        self.found.as_ref().map(|record| ResultView {
            login_id: record.login_id().to_string(),
            secret: if self.revealed {
                record.secret().as_str().to_string()
            } else {
                record.secret().masked()
            },
            revealed: self.revealed,
        })
    }
}
