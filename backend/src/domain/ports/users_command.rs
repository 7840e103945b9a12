//! Driving port for user registration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, User};

/// Request to register a user under `username`.
///
/// The username is passed through unchecked; the service decides how an
/// absent or empty value is reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
}

/// Domain use-case port for creating users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a new user and return it with its generated identifier.
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, DomainError>;
}
