//! Identifier and validated scalar types for the board domain.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a task record, assigned by the task store.
///
/// The core never parses or generates these values for remote stores; it
/// only carries them between fetch and mutation requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Wraps a store-assigned identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated non-empty task title.
///
/// Titles are trimmed and rejected locally before any create request is
/// issued to the task store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the title and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
