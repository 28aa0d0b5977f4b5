//! Core error types for Userhub

use thiserror::Error;

use crate::types::UserId;

/// Result type alias using `HubError`
pub type Result<T> = std::result::Result<T, HubError>;

/// Core error type for Userhub
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HubError {
    /// Input failed validation
    #[error("{0}")]
    Validation(String),

    /// User not found
    #[error("User not found: {0}")]
    NotFound(UserId),

    /// Storage backend failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl HubError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
