//! In-memory task store for board flow tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::board::{
    domain::{Task, TaskFields, TaskId},
    ports::{NewTask, TaskPatch, TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Preserves insertion order, which [`TaskStore::list`] reproduces, matching
/// the ordering contract of the remote service.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn apply_patch(fields: &mut TaskFields, patch: TaskPatch) {
    if let Some(title) = patch.title {
        fields.title = title;
    }
    if let Some(description) = patch.description {
        fields.description = description;
    }
    if let Some(participants) = patch.participants {
        fields.participants = participants;
    }
    if let Some(log) = patch.log {
        fields.log = log;
    }
    if let Some(completed) = patch.completed {
        fields.completed = completed;
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list(&self) -> TaskStoreResult<Vec<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::transport(std::io::Error::other(err.to_string())))?;
        Ok(state.clone())
    }

    async fn create(&self, new_task: NewTask) -> TaskStoreResult<Task> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::transport(std::io::Error::other(err.to_string())))?;
        let id = TaskId::new(Uuid::new_v4().to_string());
        let task = Task::new(id, new_task.into_fields());
        state.push(task.clone());
        Ok(task)
    }

    async fn replace(&self, id: &TaskId, fields: TaskFields) -> TaskStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::transport(std::io::Error::other(err.to_string())))?;
        let slot = state
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))?;
        *slot = Task::new(id.clone(), fields);
        Ok(())
    }

    async fn update(&self, id: &TaskId, patch: TaskPatch) -> TaskStoreResult<()> {
        if patch.is_empty() {
            return Ok(());
        }
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::transport(std::io::Error::other(err.to_string())))?;
        let slot = state
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))?;
        let mut fields = slot.fields().clone();
        apply_patch(&mut fields, patch);
        *slot = Task::new(id.clone(), fields);
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> TaskStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::transport(std::io::Error::other(err.to_string())))?;
        let position = state
            .iter()
            .position(|task| task.id() == id)
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))?;
        state.remove(position);
        Ok(())
    }
}
