//! Driving port for logging exercises against a user.

use async_trait::async_trait;

use crate::domain::{DomainError, DurationInput, Exercise, User};

/// Raw exercise submission as received by an inbound adapter.
///
/// Fields are validated by the service in declaration order, before the
/// user id is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct AddExerciseRequest {
    pub user_id: String,
    pub description: Option<String>,
    pub duration: Option<DurationInput>,
    pub date: Option<String>,
}

/// Stored exercise together with its owner.
#[derive(Debug, Clone, PartialEq)]
pub struct AddExerciseResponse {
    pub user: User,
    pub exercise: Exercise,
}

/// Domain use-case port for exercise writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExercisesCommand: Send + Sync {
    /// Validate and persist an exercise for an existing user.
    ///
    /// Invalid fields yield [`crate::domain::ErrorCode::InvalidRequest`] and
    /// an unknown user yields [`crate::domain::ErrorCode::NotFound`].
    async fn add_exercise(
        &self,
        request: AddExerciseRequest,
    ) -> Result<AddExerciseResponse, DomainError>;
}
