//! Registry error types.

use thiserror::Error;

/// Registry operation failure.
///
/// Only mutations can fail. Lookup misses are not errors: `get`/`get_at`
/// return `Option` and the search operations return an empty list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Upload targeting a name that is already registered.
    #[error("file already exists: {0}")]
    AlreadyExists(String),

    /// Copy whose source is absent, or expired at the command instant.
    #[error("source file doesn't exist: {0}")]
    SourceNotFound(String),
}

impl RegistryError {
    /// Create an AlreadyExists error.
    pub fn already_exists(name: impl Into<String>) -> Self {
        Self::AlreadyExists(name.into())
    }

    /// Create a SourceNotFound error.
    pub fn source_not_found(name: impl Into<String>) -> Self {
        Self::SourceNotFound(name.into())
    }
}

/// Registry result type.
pub type RegistryResult<T> = Result<T, RegistryError>;
