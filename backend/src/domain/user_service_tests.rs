//! Tests for the user service.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockUserRepository;

fn user(name: &str) -> User {
    User::register(Username::new(name).expect("valid username"))
}

#[tokio::test]
async fn create_user_persists_and_echoes_username() {
    let mut repo = MockUserRepository::new();
    repo.expect_insert()
        .withf(|user| user.username().as_ref() == "ada")
        .times(1)
        .return_once(|_| Ok(()));

    let service = UserService::new(Arc::new(repo));
    let created = service
        .create_user(CreateUserRequest {
            username: "ada".to_owned(),
        })
        .await
        .expect("user created");

    assert_eq!(created.username().as_ref(), "ada");
}

#[tokio::test]
async fn create_user_treats_empty_username_as_fault() {
    let mut repo = MockUserRepository::new();
    repo.expect_insert().never();

    let service = UserService::new(Arc::new(repo));
    let err = service
        .create_user(CreateUserRequest::default())
        .await
        .expect_err("empty username rejected");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[rstest]
#[case(UserPersistenceError::duplicate_username("ada"), ErrorCode::Conflict)]
#[case(UserPersistenceError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(UserPersistenceError::query("syntax"), ErrorCode::InternalError)]
#[tokio::test]
async fn create_user_maps_repository_errors(
    #[case] failure: UserPersistenceError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockUserRepository::new();
    repo.expect_insert().return_once(move |_| Err(failure));

    let service = UserService::new(Arc::new(repo));
    let err = service
        .create_user(CreateUserRequest {
            username: "ada".to_owned(),
        })
        .await
        .expect_err("insert fails");

    assert_eq!(err.code(), expected);
}

#[test]
fn duplicate_username_reports_taken_message() {
    let err = map_user_persistence_error(UserPersistenceError::duplicate_username("ada"));
    assert_eq!(err.message(), USERNAME_TAKEN_MESSAGE);
}

#[tokio::test]
async fn list_users_returns_store_order() {
    let stored = vec![user("zed"), user("amy")];
    let expected = stored.clone();

    let mut repo = MockUserRepository::new();
    repo.expect_list_all().return_once(move || Ok(stored));

    let service = UserService::new(Arc::new(repo));
    let users = service.list_users().await.expect("list succeeds");
    assert_eq!(users, expected);
}

#[tokio::test]
async fn list_users_maps_connection_failure() {
    let mut repo = MockUserRepository::new();
    repo.expect_list_all()
        .return_once(|| Err(UserPersistenceError::connection("pool exhausted")));

    let service = UserService::new(Arc::new(repo));
    let err = service.list_users().await.expect_err("list fails");
    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
}
