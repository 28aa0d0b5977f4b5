//! Storage trait for the user directory

use crate::error::Result;
use crate::types::{CreateUser, UpdateUser, User, UserId};
use async_trait::async_trait;

/// Store of user records
///
/// Handlers only see this trait, so the in-memory store can be replaced by a
/// persistent backend or a test double without touching the HTTP layer.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a user and assign it a fresh ID
    async fn create(&self, user: CreateUser) -> Result<User>;

    /// Get all users in insertion order
    async fn list(&self) -> Result<Vec<User>>;

    /// Get user by ID
    async fn get(&self, id: &UserId) -> Result<Option<User>>;

    /// Apply a partial update.
    ///
    /// Fails with `HubError::NotFound` if the ID is absent and with
    /// `HubError::Validation` if the update is empty or has a blank field.
    async fn update(&self, id: &UserId, update: UpdateUser) -> Result<User>;

    /// Delete a user, failing with `HubError::NotFound` if absent
    async fn delete(&self, id: &UserId) -> Result<()>;

    /// Number of stored users
    async fn count(&self) -> Result<usize> {
        Ok(self.list().await?.len())
    }
}
