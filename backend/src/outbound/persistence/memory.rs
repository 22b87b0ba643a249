//! In-process user store backing the repository port.
//!
//! The domain treats its store as a synchronous, consistent key-value
//! collaborator keyed by identifier. This adapter provides that contract
//! with a mutex-guarded map and a monotonically increasing identifier
//! sequence; concurrent read-modify-write on the same identifier resolves
//! last-write-wins.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId, UserProfile};

/// Mutex-guarded map of users keyed by identifier.
pub struct InMemoryUserRepository {
    inner: Mutex<Store>,
}

struct Store {
    users: HashMap<i64, User>,
    next_id: i64,
}

impl InMemoryUserRepository {
    /// Create an empty store; identifiers start at 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Store {
                users: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, UserRepositoryError> {
        self.inner
            .lock()
            .map_err(|_| UserRepositoryError::query("user store mutex poisoned"))
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let store = self.lock()?;
        Ok(store.users.get(&id.value()).cloned())
    }

    async fn insert(&self, profile: &UserProfile) -> Result<User, UserRepositoryError> {
        let mut store = self.lock()?;
        let id = UserId::new(store.next_id);
        store.next_id += 1;
        let user = User::from_profile(id, profile.clone());
        store.users.insert(id.value(), user.clone());
        Ok(user)
    }

    async fn save(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut store = self.lock()?;
        store.users.insert(user.id().value(), user.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: UserId) -> Result<bool, UserRepositoryError> {
        let mut store = self.lock()?;
        Ok(store.users.remove(&id.value()).is_some())
    }
}
