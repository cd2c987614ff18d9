//! Task-board state derivation and transition logic.
//!
//! This module owns the rules by which a flat task record set becomes a
//! three-stage board view and the rules governing how a task moves between
//! stages, toggles completion, and is edited. All task records live in the
//! remote task store; the board held here is a transient, rebuildable cache
//! of the last fetch. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
