//! Fixed stage sequence and move directions for the board.

use super::{ParseDirectionError, ParseStageError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three fixed buckets a task can visually occupy.
///
/// The stage order is fixed: `waiting` → `pending_confirmation` →
/// `resolved`. [`Stage::PendingConfirmation`] is a reserved stage with no
/// backing predicate over the `completed` flag; no derivation ever places a
/// task in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Task is awaiting resolution.
    Waiting,
    /// Reserved middle stage awaiting third-party confirmation.
    PendingConfirmation,
    /// Task has been resolved.
    Resolved,
}

impl Stage {
    /// The fixed left-to-right stage order of the board.
    pub const ORDER: [Self; 3] = [Self::Waiting, Self::PendingConfirmation, Self::Resolved];

    /// Returns the canonical stage name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::PendingConfirmation => "pending_confirmation",
            Self::Resolved => "resolved",
        }
    }

    /// Returns the position of this stage in [`Stage::ORDER`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Waiting => 0,
            Self::PendingConfirmation => 1,
            Self::Resolved => 2,
        }
    }

    /// Returns the neighbouring stage in the given direction.
    ///
    /// Returns `None` when the shift falls outside the stage order, which
    /// callers treat as a silent no-op.
    #[must_use]
    pub fn shifted(self, direction: MoveDirection) -> Option<Self> {
        let to_index = match direction {
            MoveDirection::Left => self.index().checked_sub(1)?,
            MoveDirection::Right => self.index() + 1,
        };
        Self::ORDER.get(to_index).copied()
    }

    /// Returns the `completed` value backing this stage, if any.
    ///
    /// The reserved middle stage has no predicate over the two-valued
    /// `completed` domain and yields `None`.
    #[must_use]
    pub const fn completed_predicate(self) -> Option<bool> {
        match self {
            Self::Waiting => Some(false),
            Self::PendingConfirmation => None,
            Self::Resolved => Some(true),
        }
    }
}

impl TryFrom<&str> for Stage {
    type Error = ParseStageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "waiting" => Ok(Self::Waiting),
            "pending_confirmation" => Ok(Self::PendingConfirmation),
            "resolved" => Ok(Self::Resolved),
            _ => Err(ParseStageError(value.to_owned())),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of a stage-shift request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    /// Toward the `waiting` end of the board.
    Left,
    /// Toward the `resolved` end of the board.
    Right,
}

impl MoveDirection {
    /// Returns the canonical direction name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Returns `true` when the direction points toward `resolved`.
    #[must_use]
    pub const fn is_right(self) -> bool {
        matches!(self, Self::Right)
    }
}

impl TryFrom<&str> for MoveDirection {
    type Error = ParseDirectionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ParseDirectionError(value.to_owned())),
        }
    }
}

impl fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
