//! ID types for Userhub entities

use serde::{Deserialize, Serialize};
use std::fmt;

/// User identifier
///
/// Assigned by the store as a decimal counter value, but treated as an
/// opaque string everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a user ID from any string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create the ID for a store sequence number
    pub fn from_sequence(seq: u64) -> Self {
        Self(seq.to_string())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
