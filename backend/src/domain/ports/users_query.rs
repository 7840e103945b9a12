//! Driving port for user listings.
//!
//! Inbound adapters use this port to read registered users without importing
//! outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{DomainError, User};

/// Domain use-case port for listing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every registered user in store order.
    async fn list_users(&self) -> Result<Vec<User>, DomainError>;
}
