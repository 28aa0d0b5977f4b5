//! In-memory user store

use crate::error::{HubError, Result};
use crate::storage::UserStore;
use crate::types::{CreateUser, UpdateUser, User, UserId};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

/// Process-local store backed by a vector under an async lock.
///
/// IDs come from a counter that only moves forward, so an ID is never handed
/// out twice, even after deletes. Allocation happens under the write lock.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    users: Vec<User>,
    last_id: u64,
}

impl Inner {
    fn position(&self, id: &UserId) -> Option<usize> {
        self.users.iter().position(|user| &user.id == id)
    }
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, user: CreateUser) -> Result<User> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let user = user.into_user(UserId::from_sequence(inner.last_id));
        inner.users.push(user.clone());

        debug!(user_id = %user.id, "Stored new user");
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>> {
        Ok(self.inner.read().await.users.clone())
    }

    async fn get(&self, id: &UserId) -> Result<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.position(id).map(|idx| inner.users[idx].clone()))
    }

    async fn update(&self, id: &UserId, update: UpdateUser) -> Result<User> {
        let mut inner = self.inner.write().await;
        let idx = inner
            .position(id)
            .ok_or_else(|| HubError::NotFound(id.clone()))?;

        if update.is_empty() {
            return Err(HubError::validation("No data provided"));
        }
        update.validate()?;

        let user = &mut inner.users[idx];
        update.apply_to(user);
        Ok(user.clone())
    }

    async fn delete(&self, id: &UserId) -> Result<()> {
        let mut inner = self.inner.write().await;
        let idx = inner
            .position(id)
            .ok_or_else(|| HubError::NotFound(id.clone()))?;

        inner.users.remove(idx);
        debug!(user_id = %id, "Removed user");
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.inner.read().await.users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, email: &str) -> CreateUser {
        CreateUser::new(name, email).unwrap()
    }

    #[tokio::test]
    async fn test_ids_are_sequential_from_one() {
        let store = InMemoryUserStore::new();

        let first = store.create(create("A", "a@x.io")).await.unwrap();
        let second = store.create(create("B", "b@x.io")).await.unwrap();

        assert_eq!(first.id.as_str(), "1");
        assert_eq!(second.id.as_str(), "2");
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = InMemoryUserStore::new();

        let first = store.create(create("A", "a@x.io")).await.unwrap();
        let second = store.create(create("B", "b@x.io")).await.unwrap();
        store.delete(&first.id).await.unwrap();

        let third = store.create(create("C", "c@x.io")).await.unwrap();
        assert_eq!(third.id.as_str(), "3");
        assert_ne!(third.id, second.id);
    }

    #[tokio::test]
    async fn test_update_checks_existence_before_content() {
        let store = InMemoryUserStore::new();

        let result = store
            .update(&UserId::new("42"), UpdateUser::default())
            .await;

        assert!(matches!(result, Err(HubError::NotFound(_))));
    }
}
