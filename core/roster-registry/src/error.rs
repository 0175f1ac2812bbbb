//! Error types for the registry.

use roster_types::UserId;
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur in registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No user with the given id is currently registered.
    #[error("user not found: {0}")]
    NotFound(UserId),
}
