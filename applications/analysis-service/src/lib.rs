//! Analysis Service Library
//!
//! Fetches a user from the directory service and derives a report from it:
//! name tokens, email parts, and whether the email domain looks corporate.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServiceConfig;
pub use error::{Result, ServerError};
pub use routes::create_router;
pub use services::{
    analysis::{EmailAnalysis, EmailClassifier, NameAnalysis, UserAnalysis},
    processor::UserProcessor,
};
pub use state::AppState;
