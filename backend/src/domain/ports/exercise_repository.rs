//! Port for exercise persistence and filtered log reads.

use async_trait::async_trait;

use crate::domain::{Exercise, LogFilter, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by exercise repository adapters.
    pub enum ExercisePersistenceError {
        /// Repository connection could not be established.
        Connection => "exercise repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "exercise repository query failed: {message}",
    }
}

/// Storage for logged exercises.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Persist an exercise.
    async fn insert(&self, exercise: &Exercise) -> Result<(), ExercisePersistenceError>;

    /// Exercises owned by `user_id` that satisfy `filter`.
    ///
    /// Results are ordered by date ascending, ties broken by insertion order,
    /// and truncated to the filter's limit.
    async fn list_for_user(
        &self,
        user_id: &UserId,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, ExercisePersistenceError>;
}
