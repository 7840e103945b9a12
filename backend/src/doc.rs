//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the REST handlers from the inbound layer together with
//! their request and response bodies. Swagger UI serves it in debug builds.

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::exercises::{AddExerciseBody, ExerciseResponse, LogEntry, LogResponse};
use crate::inbound::http::users::{CreateUserBody, UserResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exercise tracker API",
        description = "Create users, log exercises and read filtered exercise logs."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::exercises::add_exercise,
        crate::inbound::http::exercises::exercise_log,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateUserBody,
        UserResponse,
        AddExerciseBody,
        ExerciseResponse,
        LogEntry,
        LogResponse,
        ErrorBody
    )),
    tags(
        (name = "users", description = "User registration and listing"),
        (name = "exercises", description = "Exercise logging and log queries"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
