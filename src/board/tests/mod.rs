//! Unit tests for the board domain and services.

mod derivation_tests;

use crate::board::domain::{Task, TaskFields, TaskId};
use crate::board::ports::{NewTask, TaskPatch, TaskStore, TaskStoreResult};
use async_trait::async_trait;

mockall::mock! {
    /// Mock task store for zero-call assertions and failure injection.
    pub TaskStore {}

    #[async_trait]
    impl TaskStore for TaskStore {
        async fn list(&self) -> TaskStoreResult<Vec<Task>>;
        async fn create(&self, new_task: NewTask) -> TaskStoreResult<Task>;
        async fn replace(&self, id: &TaskId, fields: TaskFields) -> TaskStoreResult<()>;
        async fn update(&self, id: &TaskId, patch: TaskPatch) -> TaskStoreResult<()>;
        async fn delete(&self, id: &TaskId) -> TaskStoreResult<()>;
    }
}

/// Builds a task record with the given identifier, title, and completion.
pub(crate) fn task(id: &str, title: &str, completed: bool) -> Task {
    Task::new(
        TaskId::new(id),
        TaskFields {
            title: title.to_owned(),
            description: String::new(),
            participants: String::new(),
            log: String::new(),
            completed,
        },
    )
}
