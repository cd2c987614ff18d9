//! HTTP task store adapter for the remote REST task service.

mod models;
mod store;

pub use store::{HttpTaskStore, StoreConfig};
