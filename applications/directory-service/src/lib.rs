//! Directory Service Library
//!
//! HTTP user directory: create, list, fetch, update and delete user records
//! held in an injectable `UserStore`.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServiceConfig;
pub use error::{Result, ServerError};
pub use routes::create_router;
pub use state::AppState;
