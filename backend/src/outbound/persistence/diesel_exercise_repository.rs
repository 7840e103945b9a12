//! PostgreSQL-backed `ExerciseRepository` implementation using Diesel.
//!
//! Log filtering, ordering and limiting are pushed down into a single query.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ExercisePersistenceError, ExerciseRepository};
use crate::domain::{Description, Exercise, ExerciseId, LogFilter, Minutes, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ExerciseRow, NewExerciseRow};
use super::pool::{DbPool, PoolError};
use super::schema::exercises;

/// Diesel-backed implementation of the exercise repository port.
#[derive(Clone)]
pub struct DieselExerciseRepository {
    pool: DbPool,
}

impl DieselExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ExercisePersistenceError {
    map_basic_pool_error(error, ExercisePersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ExercisePersistenceError {
    map_basic_diesel_error(
        error,
        ExercisePersistenceError::query,
        ExercisePersistenceError::connection,
    )
}

fn row_to_exercise(row: ExerciseRow) -> Result<Exercise, ExercisePersistenceError> {
    let ExerciseRow {
        id,
        user_id,
        description,
        duration,
        date,
    } = row;

    let description = Description::new(description)
        .map_err(|err| ExercisePersistenceError::query(err.to_string()))?;
    let duration =
        Minutes::new(duration).map_err(|err| ExercisePersistenceError::query(err.to_string()))?;

    Ok(Exercise::new(
        ExerciseId::from_uuid(id),
        UserId::from_uuid(user_id),
        description,
        duration,
        date,
    ))
}

#[async_trait]
impl ExerciseRepository for DieselExerciseRepository {
    async fn insert(&self, exercise: &Exercise) -> Result<(), ExercisePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewExerciseRow {
            id: *exercise.id().as_uuid(),
            user_id: *exercise.user_id().as_uuid(),
            description: exercise.description().as_ref(),
            duration: exercise.duration().value(),
            date: exercise.date(),
        };

        diesel::insert_into(exercises::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, ExercisePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = exercises::table
            .filter(exercises::user_id.eq(*user_id.as_uuid()))
            .select(ExerciseRow::as_select())
            .order((exercises::date.asc(), exercises::created_at.asc()))
            .into_boxed();
        if let Some(from) = filter.from_date() {
            query = query.filter(exercises::date.ge(from));
        }
        if let Some(to) = filter.to_date() {
            query = query.filter(exercises::date.le(to));
        }
        if let Some(limit) = filter.limit() {
            query = query.limit(i64::from(limit.get()));
        }

        let rows: Vec<ExerciseRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_exercise).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use uuid::Uuid;

    fn row(duration: f64, description: &str) -> ExerciseRow {
        ExerciseRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            description: description.to_owned(),
            duration,
            date: Utc
                .with_ymd_and_hms(2023, 2, 1, 0, 0, 0)
                .single()
                .expect("valid instant"),
        }
    }

    #[rstest]
    fn valid_rows_become_exercises() {
        let source = row(30.0, "run");
        let user_id = source.user_id;
        let exercise = row_to_exercise(source).expect("valid row");
        assert_eq!(exercise.user_id().as_uuid(), &user_id);
        assert_eq!(exercise.description().as_ref(), "run");
    }

    #[rstest]
    #[case(row(f64::NAN, "run"))]
    #[case(row(10.0, ""))]
    fn corrupt_rows_are_query_errors(#[case] source: ExerciseRow) {
        assert!(matches!(
            row_to_exercise(source),
            Err(ExercisePersistenceError::Query { .. })
        ));
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        let error = diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::ClosedConnection,
            Box::new(String::from("server closed the connection")),
        );
        assert_eq!(
            map_diesel_error(error),
            ExercisePersistenceError::connection("database connection error")
        );
    }
}
