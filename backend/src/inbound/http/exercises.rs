//! Exercise logging and log retrieval handlers.
//!
//! ```text
//! POST /api/users/{id}/exercises   description=run&duration=30&date=2023-02-01
//! GET  /api/users/{id}/logs?from=2023-01-01&to=2023-03-01&limit=5
//! ```

use actix_web::{Either, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{AddExerciseRequest, AddExerciseResponse, ExerciseLogRequest};
use crate::domain::{
    DurationInput, Exercise, ExerciseLog, LogFilter, Minutes, format_calendar_date,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{ErrorBody, FaultContext};
use crate::inbound::http::state::HttpState;

const ADD_FAULT: &str = "Could not add exercise";
const LOG_FAULT: &str = "Could not retrieve log";

/// Duration as it arrives on the wire.
///
/// Form bodies always yield text; JSON may carry a number, a string or
/// something else entirely, which validation later rejects.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DurationField {
    Number(f64),
    Text(String),
    Other(Value),
}

impl From<DurationField> for DurationInput {
    fn from(value: DurationField) -> Self {
        match value {
            DurationField::Number(number) => Self::Number(number),
            DurationField::Text(text) => Self::Text(text),
            DurationField::Other(_) => Self::Unsupported,
        }
    }
}

/// Body accepted by `POST /api/users/{id}/exercises`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct AddExerciseBody {
    #[serde(default)]
    #[schema(example = "run")]
    pub description: Option<String>,
    /// Minutes, as a number or numeric string.
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 30)]
    pub duration: Option<DurationField>,
    /// Calendar date such as `2023-02-01`; today when absent or blank.
    #[serde(default)]
    #[schema(example = "2023-02-01")]
    pub date: Option<String>,
}

/// Stored exercise echoed back with its owner.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ExerciseResponse {
    /// Owner's user id.
    pub id: String,
    pub username: String,
    #[schema(example = "Wed Feb 01 2023")]
    pub date: String,
    #[schema(value_type = f64, example = 30)]
    pub duration: Minutes,
    pub description: String,
}

impl From<AddExerciseResponse> for ExerciseResponse {
    fn from(value: AddExerciseResponse) -> Self {
        let AddExerciseResponse { user, exercise } = value;
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            date: format_calendar_date(&exercise.date()),
            duration: exercise.duration(),
            description: exercise.description().as_ref().to_owned(),
        }
    }
}

/// Query string accepted by `GET /api/users/{id}/logs`.
///
/// Values that do not parse are ignored.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogQuery {
    /// Earliest date to include.
    pub from: Option<String>,
    /// Latest date to include.
    pub to: Option<String>,
    /// Maximum number of entries, applied after sorting by date.
    pub limit: Option<String>,
}

impl From<&LogQuery> for LogFilter {
    fn from(query: &LogQuery) -> Self {
        Self::from_query(
            query.from.as_deref(),
            query.to.as_deref(),
            query.limit.as_deref(),
        )
    }
}

/// One log entry.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LogEntry {
    pub description: String,
    #[schema(value_type = f64, example = 30)]
    pub duration: Minutes,
    #[schema(example = "Wed Feb 01 2023")]
    pub date: String,
}

impl From<&Exercise> for LogEntry {
    fn from(exercise: &Exercise) -> Self {
        Self {
            description: exercise.description().as_ref().to_owned(),
            duration: exercise.duration(),
            date: format_calendar_date(&exercise.date()),
        }
    }
}

/// A user's filtered exercise log.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LogResponse {
    pub id: String,
    pub username: String,
    /// Number of entries in `log`.
    pub count: usize,
    pub log: Vec<LogEntry>,
}

impl From<&ExerciseLog> for LogResponse {
    fn from(log: &ExerciseLog) -> Self {
        Self {
            id: log.user().id().to_string(),
            username: log.user().username().to_string(),
            count: log.count(),
            log: log.entries().iter().map(LogEntry::from).collect(),
        }
    }
}

/// Log an exercise for an existing user.
///
/// Validation failures and unknown users are reported in the body of a
/// `200` response. An unreadable or missing body counts as empty and so
/// fails validation.
#[utoipa::path(
    post,
    path = "/api/users/{id}/exercises",
    params(("id" = String, Path, description = "User id")),
    request_body(
        content = AddExerciseBody,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Stored exercise, `Invalid input.` or `User not found`", body = ExerciseResponse),
        (status = 500, description = "Could not add exercise", body = ErrorBody)
    ),
    tags = ["exercises"],
    operation_id = "addExercise"
)]
#[post("/users/{id}/exercises")]
pub async fn add_exercise(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: Option<Either<web::Json<AddExerciseBody>, web::Form<AddExerciseBody>>>,
) -> ApiResult<web::Json<ExerciseResponse>> {
    let body = match payload {
        Some(Either::Left(json)) => json.into_inner(),
        Some(Either::Right(form)) => form.into_inner(),
        None => AddExerciseBody::default(),
    };
    let request = AddExerciseRequest {
        user_id: path.into_inner(),
        description: body.description,
        duration: body.duration.map(DurationInput::from),
        date: body.date,
    };

    let response = state
        .exercises
        .add_exercise(request)
        .await
        .or_fault(ADD_FAULT)?;
    Ok(web::Json(ExerciseResponse::from(response)))
}

/// Read a user's exercise log, oldest first.
#[utoipa::path(
    get,
    path = "/api/users/{id}/logs",
    params(("id" = String, Path, description = "User id"), LogQuery),
    responses(
        (status = 200, description = "Exercise log or `User not found`", body = LogResponse),
        (status = 500, description = "Could not retrieve log", body = ErrorBody)
    ),
    tags = ["exercises"],
    operation_id = "exerciseLog"
)]
#[get("/users/{id}/logs")]
pub async fn exercise_log(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<LogQuery>,
) -> ApiResult<web::Json<LogResponse>> {
    let request = ExerciseLogRequest {
        user_id: path.into_inner(),
        filter: LogFilter::from(&*query),
    };

    let log = state
        .exercise_log
        .exercise_log(request)
        .await
        .or_fault(LOG_FAULT)?;
    Ok(web::Json(LogResponse::from(&log)))
}
