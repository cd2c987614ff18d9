//! Tablero: a task-board client core.
//!
//! This crate derives a three-stage board view from a flat task list held by
//! a remote task service and implements the task-transition operations (add,
//! edit, move, toggle-complete, delete) against that service. The board is
//! never a source of truth: it is recomputed in full from the latest fetched
//! task list after every mutation.
//!
//! # Architecture
//!
//! Tablero follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board and task types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the external task service
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`board`]: Board derivation, task transitions, and the task store contract

pub mod board;
