//! Driving port for user account mutations.
//!
//! Inbound adapters (HTTP handlers) call this port; the domain service
//! implements it. Handlers stay free of business rules and never see
//! repository types.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId, UserProfile};

/// Domain use-case port for creating, updating, and deleting users.
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Create a user from an already-validated profile, assigning a fresh
    /// identifier.
    async fn create_user(&self, profile: UserProfile) -> Result<User, Error>;

    /// Replace the mutable fields of an existing user.
    ///
    /// Takes the unvalidated draft: the lookup runs first so an unknown
    /// identifier is reported as not-found even when the payload is also
    /// invalid. Body validation still precedes any mutation.
    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error>;

    /// Delete a user by identifier.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
