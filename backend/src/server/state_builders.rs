//! Builders wiring the HTTP state to repository adapters.

use std::sync::Arc;

use actix_web::web;
use mockable::Clock;

use exercise_tracker::domain::ports::{ExerciseRepository, UserRepository};
use exercise_tracker::inbound::http::state::HttpState;
use exercise_tracker::outbound::memory::{InMemoryExerciseRepository, InMemoryUserRepository};
use exercise_tracker::outbound::persistence::{DieselExerciseRepository, DieselUserRepository};

use super::ServerConfig;

/// Build the state over pool-backed repositories when a pool is present,
/// otherwise over fresh in-memory stores.
fn build_http_state_with_pool<Pool, U, E, MakeRepos>(
    pool: &Option<Pool>,
    make_repos: MakeRepos,
    clock: Arc<dyn Clock>,
) -> HttpState
where
    U: UserRepository + 'static,
    E: ExerciseRepository + 'static,
    MakeRepos: FnOnce(&Pool) -> (Arc<U>, Arc<E>),
{
    match pool {
        Some(pool) => {
            let (users, exercises) = make_repos(pool);
            HttpState::from_repositories(users, exercises, clock)
        }
        None => HttpState::from_repositories(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryExerciseRepository::new()),
            clock,
        ),
    }
}

pub(super) fn build_http_state(
    config: &ServerConfig,
    clock: Arc<dyn Clock>,
) -> web::Data<HttpState> {
    web::Data::new(build_http_state_with_pool(
        &config.db_pool,
        |pool| {
            (
                Arc::new(DieselUserRepository::new(pool.clone())),
                Arc::new(DieselExerciseRepository::new(pool.clone())),
            )
        },
        clock,
    ))
}
