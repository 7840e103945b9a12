//! User registration and listing services.
//!
//! `UserService` implements the user driving ports over a [`UserRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    CreateUserRequest, UserPersistenceError, UserRepository, UsersCommand, UsersQuery,
};
use crate::domain::{DomainError, User, Username};

/// Message returned when a username collides with an existing user.
pub const USERNAME_TAKEN_MESSAGE: &str = "Username already taken";

pub(crate) fn map_user_persistence_error(error: UserPersistenceError) -> DomainError {
    match error {
        UserPersistenceError::Connection { message } => {
            DomainError::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            DomainError::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateUsername { .. } => {
            DomainError::conflict(USERNAME_TAKEN_MESSAGE)
        }
    }
}

/// Domain service for registering and listing users.
#[derive(Clone)]
pub struct UserService<R> {
    user_repo: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a new service backed by `user_repo`.
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        // A missing username is a storage-level required-field failure, not a
        // caller error.
        let username = Username::new(request.username)
            .map_err(|err| DomainError::internal(format!("user rejected by store: {err}")))?;
        let user = User::register(username);

        self.user_repo
            .insert(&user)
            .await
            .map_err(map_user_persistence_error)?;

        debug!(user_id = %user.id(), "registered user");
        Ok(user)
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.user_repo
            .list_all()
            .await
            .map_err(map_user_persistence_error)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
