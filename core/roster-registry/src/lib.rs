//! In-memory user registry for the roster service.
//!
//! The registry is the single owner of the user collection and of the id
//! counter. It is constructed explicitly at startup and shared with request
//! handlers through an `Arc`; nothing else mutates its state.
//!
//! # Concurrency
//!
//! The collection and the counter live behind one `tokio::sync::RwLock`.
//! Creates and deletes take the write side, so id allocation and insertion
//! happen as one step and allocation order always equals insertion order.
//! Reads take the read side and may run concurrently with each other.

mod error;
mod registry;

pub use error::{RegistryError, RegistryResult};
pub use registry::UserRegistry;
