//! User registration and listing handlers.
//!
//! ```text
//! POST /api/users   username=ada
//! GET  /api/users
//! ```

use actix_web::{Either, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::User;
use crate::domain::ports::CreateUserRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{ErrorBody, FaultContext};
use crate::inbound::http::state::HttpState;

const SAVE_FAULT: &str = "Could not save user";
const LIST_FAULT: &str = "Could not retrieve users";

/// Body accepted by `POST /api/users`, as JSON or form fields.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateUserBody {
    #[serde(default)]
    #[schema(example = "ada")]
    pub username: Option<String>,
}

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "ada")]
    pub username: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
        }
    }
}

/// Register a user.
///
/// A taken username is reported in the body of a `200` response. A request
/// whose body is neither JSON nor form data is treated as carrying no fields.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body(
        content = CreateUserBody,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Created user, or `Username already taken`", body = UserResponse),
        (status = 500, description = "Could not save user", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: Option<Either<web::Json<CreateUserBody>, web::Form<CreateUserBody>>>,
) -> ApiResult<web::Json<UserResponse>> {
    let body = match payload {
        Some(Either::Left(json)) => json.into_inner(),
        Some(Either::Right(form)) => form.into_inner(),
        None => CreateUserBody::default(),
    };
    let request = CreateUserRequest {
        username: body.username.unwrap_or_default(),
    };

    let user = state.users.create_user(request).await.or_fault(SAVE_FAULT)?;
    Ok(web::Json(UserResponse::from(&user)))
}

/// List every registered user.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users in store order", body = [UserResponse]),
        (status = 500, description = "Could not retrieve users", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users_query.list_users().await.or_fault(LIST_FAULT)?;
    Ok(web::Json(users.iter().map(UserResponse::from).collect()))
}

#[cfg(test)]
mod tests;
