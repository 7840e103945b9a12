//! Driving port for reading a user's exercise log.

use async_trait::async_trait;

use crate::domain::{DomainError, ExerciseLog, LogFilter};

/// Request for the log of `user_id`, narrowed by `filter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLogRequest {
    pub user_id: String,
    pub filter: LogFilter,
}

/// Domain use-case port for exercise log reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseLogQuery: Send + Sync {
    /// Return the filtered log, oldest entry first.
    async fn exercise_log(&self, request: ExerciseLogRequest) -> Result<ExerciseLog, DomainError>;
}
