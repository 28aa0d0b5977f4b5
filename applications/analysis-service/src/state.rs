/// Shared application state
use crate::services::UserProcessor;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<UserProcessor>,
}

impl AppState {
    pub fn new(processor: Arc<UserProcessor>) -> Self {
        Self { processor }
    }
}
