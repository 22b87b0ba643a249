//! User account domain service.
//!
//! Implements the driving [`UserCommand`] port over a [`UserRepository`],
//! enforcing the lookup-before-validation ordering for mutations addressed
//! by identifier: a missing record reports not-found before the payload is
//! inspected, and an invalid payload never reaches the repository.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{UserCommand, UserRepository, UserRepositoryError};
use crate::domain::{Error, User, UserDraft, UserId, UserProfile};

/// Domain service orchestrating lookup, validation, merge, and persistence.
#[derive(Clone)]
pub struct UserService<R> {
    repository: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn unknown_user_error(id: UserId) -> Error {
    Error::not_found(format!("user {id} not found")).with_details(json!({ "id": id.value() }))
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    fn map_repository_error(error: UserRepositoryError) -> Error {
        match error {
            UserRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserRepositoryError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
        }
    }

    async fn fetch_existing(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| unknown_user_error(id))
    }
}

#[async_trait]
impl<R> UserCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, profile: UserProfile) -> Result<User, Error> {
        let created = self
            .repository
            .insert(&profile)
            .await
            .map_err(Self::map_repository_error)?;
        info!(user_id = %created.id(), "user created");
        Ok(created)
    }

    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error> {
        let existing = self.fetch_existing(id).await?;
        let profile = draft.validate()?;
        let updated = existing.merge(profile);
        self.repository
            .save(&updated)
            .await
            .map_err(Self::map_repository_error)?;
        info!(user_id = %id, "user updated");
        Ok(updated)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        self.fetch_existing(id).await?;
        let removed = self
            .repository
            .delete_by_id(id)
            .await
            .map_err(Self::map_repository_error)?;
        if !removed {
            // The record vanished between the two repository calls; report it
            // the same way as a stale identifier.
            return Err(unknown_user_error(id));
        }
        info!(user_id = %id, "user deleted");
        Ok(())
    }
}
