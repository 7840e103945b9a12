//! Exercise logging services.
//!
//! `ExerciseService` validates submissions, resolves the owning user and
//! stamps undated exercises with the injected clock's current instant.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::debug;

use crate::domain::ports::{
    AddExerciseRequest, AddExerciseResponse, ExerciseLogQuery, ExerciseLogRequest,
    ExercisePersistenceError, ExerciseRepository, ExercisesCommand, UserRepository,
};
use crate::domain::user_service::map_user_persistence_error;
use crate::domain::{DomainError, ExerciseDraft, ExerciseLog, User, UserId};

/// Message returned for any rejected exercise field.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input.";
/// Message returned when the path user id matches no user.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

fn map_exercise_persistence_error(error: ExercisePersistenceError) -> DomainError {
    match error {
        ExercisePersistenceError::Connection { message } => {
            DomainError::service_unavailable(format!("exercise repository unavailable: {message}"))
        }
        ExercisePersistenceError::Query { message } => {
            DomainError::internal(format!("exercise repository error: {message}"))
        }
    }
}

/// Domain service for writing and reading exercise logs.
#[derive(Clone)]
pub struct ExerciseService<U, E> {
    user_repo: Arc<U>,
    exercise_repo: Arc<E>,
    clock: Arc<dyn Clock>,
}

impl<U, E> ExerciseService<U, E> {
    /// Create a new service. `clock` supplies the default exercise date.
    pub fn new(user_repo: Arc<U>, exercise_repo: Arc<E>, clock: Arc<dyn Clock>) -> Self {
        Self {
            user_repo,
            exercise_repo,
            clock,
        }
    }
}

impl<U, E> ExerciseService<U, E>
where
    U: UserRepository,
{
    /// Resolve a raw path id to a stored user.
    ///
    /// Malformed ids cannot match any user, so they report not-found too.
    async fn resolve_user(&self, raw_id: &str) -> Result<User, DomainError> {
        let Ok(user_id) = UserId::new(raw_id) else {
            return Err(DomainError::not_found(USER_NOT_FOUND_MESSAGE));
        };
        self.user_repo
            .find_by_id(&user_id)
            .await
            .map_err(map_user_persistence_error)?
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND_MESSAGE))
    }
}

#[async_trait]
impl<U, E> ExercisesCommand for ExerciseService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn add_exercise(
        &self,
        request: AddExerciseRequest,
    ) -> Result<AddExerciseResponse, DomainError> {
        let AddExerciseRequest {
            user_id,
            description,
            duration,
            date,
        } = request;

        let draft = ExerciseDraft::parse(description, duration, date.as_deref()).map_err(|err| {
            DomainError::invalid_request(INVALID_INPUT_MESSAGE)
                .with_details(json!({ "reason": err.to_string() }))
        })?;
        let user = self.resolve_user(&user_id).await?;

        let exercise = draft.into_exercise(*user.id(), self.clock.utc());
        self.exercise_repo
            .insert(&exercise)
            .await
            .map_err(map_exercise_persistence_error)?;

        debug!(user_id = %user.id(), exercise_id = %exercise.id(), "logged exercise");
        Ok(AddExerciseResponse { user, exercise })
    }
}

#[async_trait]
impl<U, E> ExerciseLogQuery for ExerciseService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn exercise_log(&self, request: ExerciseLogRequest) -> Result<ExerciseLog, DomainError> {
        let user = self.resolve_user(&request.user_id).await?;
        let entries = self
            .exercise_repo
            .list_for_user(user.id(), &request.filter)
            .await
            .map_err(map_exercise_persistence_error)?;
        Ok(ExerciseLog::new(user, entries))
    }
}

#[cfg(test)]
#[path = "exercise_service_tests.rs"]
mod tests;
