//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the driving
//! ports, so tests can swap in mocks or in-memory services.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    ExerciseLogQuery, ExerciseRepository, ExercisesCommand, UserRepository, UsersCommand,
    UsersQuery,
};
use crate::domain::{ExerciseService, UserService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub exercises: Arc<dyn ExercisesCommand>,
    pub exercise_log: Arc<dyn ExerciseLogQuery>,
}

impl HttpState {
    /// Assemble state from individual port implementations.
    pub fn new(
        users: Arc<dyn UsersCommand>,
        users_query: Arc<dyn UsersQuery>,
        exercises: Arc<dyn ExercisesCommand>,
        exercise_log: Arc<dyn ExerciseLogQuery>,
    ) -> Self {
        Self {
            users,
            users_query,
            exercises,
            exercise_log,
        }
    }

    /// Wire the domain services over a pair of repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use mockable::DefaultClock;
    /// use exercise_tracker::inbound::http::state::HttpState;
    /// use exercise_tracker::outbound::memory::{InMemoryExerciseRepository, InMemoryUserRepository};
    ///
    /// let state = HttpState::from_repositories(
    ///     Arc::new(InMemoryUserRepository::new()),
    ///     Arc::new(InMemoryExerciseRepository::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = state;
    /// ```
    pub fn from_repositories<U, E>(
        user_repo: Arc<U>,
        exercise_repo: Arc<E>,
        clock: Arc<dyn Clock>,
    ) -> Self
    where
        U: UserRepository + 'static,
        E: ExerciseRepository + 'static,
    {
        let user_service = Arc::new(UserService::new(Arc::clone(&user_repo)));
        let exercise_service = Arc::new(ExerciseService::new(user_repo, exercise_repo, clock));
        Self::new(
            user_service.clone(),
            user_service,
            exercise_service.clone(),
            exercise_service,
        )
    }
}
