//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,
}

/// Error returned while parsing stage names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown stage: {0}")]
pub struct ParseStageError(pub String);

/// Error returned while parsing move directions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown move direction: {0}")]
pub struct ParseDirectionError(pub String);
