//! In-process repository adapters.
//!
//! Used when no database URL is configured and by HTTP tests. Records live in
//! insertion order behind a mutex; nothing survives a restart.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    ExercisePersistenceError, ExerciseRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{Exercise, LogFilter, User, UserId};

fn lock<T>(store: &Mutex<Vec<T>>) -> Result<MutexGuard<'_, Vec<T>>, String> {
    store
        .lock()
        .map_err(|_| String::from("in-memory store lock poisoned"))
}

/// User store keeping users in registration order.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = lock(&self.users).map_err(UserPersistenceError::connection)?;
        if users
            .iter()
            .any(|existing| existing.username() == user.username())
        {
            return Err(UserPersistenceError::duplicate_username(
                user.username().as_ref(),
            ));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let users = lock(&self.users).map_err(UserPersistenceError::connection)?;
        Ok(users.iter().find(|user| user.id() == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let users = lock(&self.users).map_err(UserPersistenceError::connection)?;
        Ok(users.clone())
    }
}

/// Exercise store keeping entries in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryExerciseRepository {
    exercises: Mutex<Vec<Exercise>>,
}

impl InMemoryExerciseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryExerciseRepository {
    async fn insert(&self, exercise: &Exercise) -> Result<(), ExercisePersistenceError> {
        let mut exercises = lock(&self.exercises).map_err(ExercisePersistenceError::connection)?;
        exercises.push(exercise.clone());
        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, ExercisePersistenceError> {
        let exercises = lock(&self.exercises).map_err(ExercisePersistenceError::connection)?;
        let mut matched: Vec<Exercise> = exercises
            .iter()
            .filter(|exercise| exercise.user_id() == user_id && filter.admits(exercise.date()))
            .cloned()
            .collect();
        // Stable: equal dates keep insertion order.
        matched.sort_by_key(Exercise::date);
        if let Some(limit) = filter.limit() {
            matched.truncate(usize::try_from(limit.get()).unwrap_or(usize::MAX));
        }
        Ok(matched)
    }
}
