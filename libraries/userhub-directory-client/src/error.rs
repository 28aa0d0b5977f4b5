//! Error types for the directory client.

use thiserror::Error;

/// Errors that can occur when talking to the directory service.
#[derive(Error, Debug)]
pub enum DirectoryClientError {
    /// Invalid base URL
    #[error("Invalid directory URL: {0}")]
    InvalidUrl(String),

    /// The directory reported that the user does not exist
    #[error("User not found")]
    NotFound,

    /// Connection refused, timed out, or dropped mid-response
    #[error("Directory unreachable: {0}")]
    Unreachable(String),

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The directory rejected the request (4xx other than 404)
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The directory returned an unexpected status
    #[error("Directory error ({status}): {message}")]
    ServerError { status: u16, message: String },
}

/// Result type for directory client operations.
pub type Result<T> = std::result::Result<T, DirectoryClientError>;
