//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{User, UserId, UserProfile};

/// Persistence errors raised by [`UserRepository`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserRepositoryError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserRepositoryError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence port for user aggregates.
///
/// The adapter owns durable storage keyed by identifier and assigns fresh
/// identifiers on insert. The service treats it as a consistent key-value
/// store; it performs no cross-record queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Persist a new user, assigning its identifier.
    async fn insert(&self, profile: &UserProfile) -> Result<User, UserRepositoryError>;

    /// Replace the stored record for an existing user.
    async fn save(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Remove a user by identifier, reporting whether a record existed.
    async fn delete_by_id(&self, id: UserId) -> Result<bool, UserRepositoryError>;
}
