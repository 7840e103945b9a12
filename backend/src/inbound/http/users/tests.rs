//! Tests for the user handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::DomainError;
use crate::domain::ports::{MockUsersCommand, MockUsersQuery};
use crate::inbound::http::configure_api;
use crate::inbound::http::test_utils::in_memory_state;

async fn call(state: web::Data<HttpState>, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(App::new().app_data(state).configure(configure_api)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body: Value = actix_test::read_body_json(response).await;
    (status, body)
}

fn form_create(username: &str) -> actix_test::TestRequest {
    actix_test::TestRequest::post()
        .uri("/api/users")
        .set_form([("username", username)])
}

fn json_create(username: &str) -> actix_test::TestRequest {
    actix_test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "username": username }))
}

fn state_with(users: MockUsersCommand, users_query: MockUsersQuery) -> web::Data<HttpState> {
    let fallback = in_memory_state();
    web::Data::new(HttpState::new(
        Arc::new(users),
        Arc::new(users_query),
        fallback.exercises.clone(),
        fallback.exercise_log.clone(),
    ))
}

#[rstest]
#[case::form(form_create("ada"))]
#[case::json(json_create("ada"))]
#[actix_web::test]
async fn create_user_echoes_username_with_new_id(#[case] request: actix_test::TestRequest) {
    let (status, body) = call(in_memory_state(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.get("username").and_then(Value::as_str), Some("ada"));
    let id = body.get("id").and_then(Value::as_str).expect("id present");
    assert!(crate::domain::UserId::new(id).is_ok());
}

#[actix_web::test]
async fn duplicate_username_is_a_business_error() {
    let state = in_memory_state();
    let (_, first) = call(state.clone(), form_create("ada")).await;
    assert!(first.get("id").is_some());

    let (status, second) = call(state, json_create("ada")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second, json!({ "error": "Username already taken" }));
}

#[actix_web::test]
async fn missing_username_is_a_fault() {
    let request = actix_test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({}));
    let (status, body) = call(in_memory_state(), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Could not save user" }));
}

#[rstest]
#[case::no_body(None)]
#[case::plain_text(Some("username=ada"))]
#[actix_web::test]
async fn unreadable_body_is_a_fault(#[case] text: Option<&'static str>) {
    let mut request = actix_test::TestRequest::post().uri("/api/users");
    if let Some(text) = text {
        request = request
            .insert_header((actix_web::http::header::CONTENT_TYPE, "text/plain"))
            .set_payload(text);
    }
    let (status, body) = call(in_memory_state(), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Could not save user" }));
}

#[actix_web::test]
async fn store_failure_on_create_is_a_fault() {
    let mut users = MockUsersCommand::new();
    users
        .expect_create_user()
        .return_once(|_| Err(DomainError::service_unavailable("pool timed out")));

    let (status, body) = call(state_with(users, MockUsersQuery::new()), form_create("ada")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Could not save user" }));
}

#[actix_web::test]
async fn list_users_returns_every_user() {
    let state = in_memory_state();
    for name in ["u1", "u2"] {
        call(state.clone(), form_create(name)).await;
    }

    let (status, body) = call(state, actix_test::TestRequest::get().uri("/api/users")).await;
    assert_eq!(status, StatusCode::OK);

    let users = body.as_array().expect("array body");
    let names: Vec<&str> = users
        .iter()
        .filter_map(|user| user.get("username").and_then(Value::as_str))
        .collect();
    assert_eq!(names, ["u1", "u2"]);
    assert!(users.iter().all(|user| user.get("id").is_some()));
}

#[actix_web::test]
async fn list_failure_is_a_fault() {
    let mut users_query = MockUsersQuery::new();
    users_query
        .expect_list_users()
        .return_once(|| Err(DomainError::internal("relation missing")));

    let (status, body) = call(
        state_with(MockUsersCommand::new(), users_query),
        actix_test::TestRequest::get().uri("/api/users"),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Could not retrieve users" }));
}
