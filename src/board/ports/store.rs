//! Store port for task listing, creation, mutation, and deletion.

use crate::board::domain::{Task, TaskFields, TaskId, TaskTitle};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Contract of the remote task service.
///
/// All task records live behind this port; the board core holds only a
/// transient cache of the last [`TaskStore::list`] result.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns the full ordered task list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Transport`] when the service is unreachable
    /// or answers with an unexpected status.
    async fn list(&self) -> TaskStoreResult<Vec<Task>>;

    /// Creates a new task record; the store assigns the identifier and
    /// defaults `completed` to `false`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] when the service rejects the
    /// payload, or [`TaskStoreError::Transport`] on availability failure.
    async fn create(&self, new_task: NewTask) -> TaskStoreResult<Task>;

    /// Replaces the full mutable field set of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the identifier is stale, or
    /// [`TaskStoreError::Transport`] on availability failure.
    async fn replace(&self, id: &TaskId, fields: TaskFields) -> TaskStoreResult<()>;

    /// Updates a subset of fields of an existing task.
    ///
    /// A patch carrying no fields is a no-op: implementations succeed
    /// without touching the task or issuing a request.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the identifier is stale, or
    /// [`TaskStoreError::Transport`] on availability failure.
    async fn update(&self, id: &TaskId, patch: TaskPatch) -> TaskStoreResult<()>;

    /// Deletes an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the identifier is stale, or
    /// [`TaskStoreError::Transport`] on availability failure.
    async fn delete(&self, id: &TaskId) -> TaskStoreResult<()>;
}

/// Payload for creating a task record.
///
/// Carries a validated title; the remaining free-form fields default to
/// empty. The store sets `completed = false` on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: TaskTitle,
    description: String,
    participants: String,
    log: String,
}

impl NewTask {
    /// Creates a payload with the required title.
    #[must_use]
    pub fn new(title: TaskTitle) -> Self {
        Self {
            title,
            description: String::new(),
            participants: String::new(),
            log: String::new(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the involved people.
    #[must_use]
    pub fn with_participants(mut self, participants: impl Into<String>) -> Self {
        self.participants = participants.into();
        self
    }

    /// Sets the comment/activity log.
    #[must_use]
    pub fn with_log(mut self, log: impl Into<String>) -> Self {
        self.log = log.into();
        self
    }

    /// Returns the validated title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the involved people.
    #[must_use]
    pub fn participants(&self) -> &str {
        &self.participants
    }

    /// Returns the comment/activity log.
    #[must_use]
    pub fn log(&self) -> &str {
        &self.log
    }

    /// Converts the payload into the field set of a freshly created task.
    #[must_use]
    pub fn into_fields(self) -> TaskFields {
        TaskFields {
            title: self.title.into_inner(),
            description: self.description,
            participants: self.participants,
            log: self.log,
            completed: false,
        }
    }
}

/// Sparse update payload for a task record.
///
/// Absent fields are left untouched by the store; serialization skips them
/// entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskPatch {
    /// Replacement title, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement description, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement participants, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<String>,
    /// Replacement log, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,
    /// Replacement completion flag, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Sets the completion flag.
    #[must_use]
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Returns `true` when the patch carries no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.participants.is_none()
            && self.log.is_none()
            && self.completed.is_none()
    }
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The service was unreachable or answered with an unexpected status.
    #[error("task store transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The service rejected the submitted payload.
    #[error("task store rejected payload: {0}")]
    Validation(String),

    /// The identified task does not exist (stale identifier).
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

impl TaskStoreError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
