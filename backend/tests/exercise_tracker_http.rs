//! End-to-end tests driving the public HTTP wiring over in-memory stores.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use exercise_tracker::Trace;
use exercise_tracker::domain::TRACE_ID_HEADER;
use exercise_tracker::inbound::http::state::HttpState;
use exercise_tracker::inbound::http::{configure_api, configure_pages};
use exercise_tracker::outbound::memory::{InMemoryExerciseRepository, InMemoryUserRepository};
use mockable::Clock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

struct FrozenClock(DateTime<Utc>);

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

#[fixture]
fn state() -> web::Data<HttpState> {
    let now = Utc
        .with_ymd_and_hms(2024, 2, 29, 18, 30, 0)
        .single()
        .expect("valid instant");
    web::Data::new(HttpState::from_repositories(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryExerciseRepository::new()),
        Arc::new(FrozenClock(now)),
    ))
}

fn app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(Trace)
        .configure(configure_api)
        .configure(configure_pages)
}

fn field<'a>(body: &'a Value, name: &str) -> &'a str {
    body.get(name)
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("missing string field {name} in {body}"))
}

#[rstest]
#[actix_web::test]
async fn user_logs_exercises_and_reads_them_back(state: web::Data<HttpState>) {
    let app = test::init_service(app(state)).await;

    let user: Value = test::call_and_read_body_json(
        &app,
        TestRequest::post()
            .uri("/api/users")
            .set_form([("username", "grace")])
            .to_request(),
    )
    .await;
    let user_id = field(&user, "id").to_owned();
    assert_eq!(field(&user, "username"), "grace");

    for (description, duration, date) in [
        ("rowing", json!(45), json!("2024-01-10")),
        ("yoga", json!("20"), json!("2024-01-03")),
        ("sprints", json!(12.5), json!("")),
    ] {
        let added: Value = test::call_and_read_body_json(
            &app,
            TestRequest::post()
                .uri(&format!("/api/users/{user_id}/exercises"))
                .set_json(json!({
                    "description": description,
                    "duration": duration,
                    "date": date,
                }))
                .to_request(),
        )
        .await;
        assert_eq!(field(&added, "id"), user_id);
        assert_eq!(field(&added, "description"), description);
    }

    let log: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get()
            .uri(&format!("/api/users/{user_id}/logs"))
            .to_request(),
    )
    .await;
    assert_eq!(
        log,
        json!({
            "id": user_id,
            "username": "grace",
            "count": 3,
            "log": [
                { "description": "yoga", "duration": 20, "date": "Wed Jan 03 2024" },
                { "description": "rowing", "duration": 45, "date": "Wed Jan 10 2024" },
                { "description": "sprints", "duration": 12.5, "date": "Thu Feb 29 2024" },
            ],
        })
    );

    let filtered: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get()
            .uri(&format!(
                "/api/users/{user_id}/logs?from=2024-01-05&to=2024-03-01&limit=1"
            ))
            .to_request(),
    )
    .await;
    assert_eq!(filtered.get("count"), Some(&json!(1)));
    assert_eq!(
        filtered.pointer("/log/0/description"),
        Some(&json!("rowing"))
    );
}

#[rstest]
#[actix_web::test]
async fn caller_errors_are_reported_in_ok_bodies(state: web::Data<HttpState>) {
    let app = test::init_service(app(state)).await;

    let first = TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "username": "ada" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, first).await;
    assert_eq!(field(&created, "username"), "ada");

    let duplicate = TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "username": "ada" }))
        .to_request();
    let res = test::call_service(&app, duplicate).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "error": "Username already taken" }));

    let unknown = TestRequest::get()
        .uri("/api/users/00000000-0000-4000-8000-000000000000/logs")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, unknown).await;
    assert_eq!(body, json!({ "error": "User not found" }));

    let invalid = TestRequest::post()
        .uri("/api/users/00000000-0000-4000-8000-000000000000/exercises")
        .set_form([("description", "run"), ("duration", "soon")])
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, invalid).await;
    assert_eq!(body, json!({ "error": "Invalid input." }));
}

#[rstest]
#[actix_web::test]
async fn responses_carry_a_trace_id(state: web::Data<HttpState>) {
    let app = test::init_service(app(state)).await;
    let res = test::call_service(&app, TestRequest::get().uri("/api/users").to_request()).await;
    let trace_id = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .expect("trace id header");
    assert!(uuid::Uuid::parse_str(trace_id).is_ok());
}

#[rstest]
#[actix_web::test]
async fn landing_page_links_the_stylesheet(state: web::Data<HttpState>) {
    let app = test::init_service(app(state)).await;
    let res = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("text/html"));
    let body = test::read_body(res).await;
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("/public/style.css"));
}
