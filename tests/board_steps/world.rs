//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use tablero::board::{
    adapters::memory::InMemoryTaskStore,
    domain::Task,
    services::BoardController,
};

/// Controller type used by the BDD world.
pub type TestController = BoardController<InMemoryTaskStore>;

/// Scenario world for task board behaviour tests.
pub struct BoardWorld {
    pub store: Arc<InMemoryTaskStore>,
    pub controller: TestController,
    pub seeded_task: Option<Task>,
}

impl BoardWorld {
    /// Creates a world over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryTaskStore::new());
        let controller = BoardController::new(Arc::clone(&store));
        Self {
            store,
            controller,
            seeded_task: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
