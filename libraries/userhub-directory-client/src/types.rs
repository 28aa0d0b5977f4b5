//! Types for directory service requests and responses.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timeout applied to every directory call unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for connecting to a directory service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service (e.g., "http://localhost:5000")
    pub url: String,
    /// Upper bound for a whole request, connect included
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replace the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Request body for creating a user.
#[derive(Debug, Serialize)]
pub(crate) struct CreateUserRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Error body returned by the directory service.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

/// Health endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}
