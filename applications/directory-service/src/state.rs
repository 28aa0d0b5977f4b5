/// Shared application state
use std::sync::Arc;
use userhub_core::{InMemoryUserStore, UserStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// State backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUserStore::new()))
    }
}
