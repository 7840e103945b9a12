//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn ada() -> User {
    User::try_from_strings(VALID_ID, "ada").expect("valid user")
}

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case("not-a-uuid", UserValidationError::InvalidId)]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", UserValidationError::InvalidId)]
fn user_id_rejects_bad_values(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserId::new(raw), Err(expected));
}

#[rstest]
fn random_ids_differ() {
    assert_ne!(UserId::random(), UserId::random());
}

#[rstest]
fn username_requires_content() {
    assert_eq!(Username::new(""), Err(UserValidationError::EmptyUsername));
    assert_eq!(Username::new("a b").map(String::from), Ok("a b".to_owned()));
}

#[rstest]
fn register_assigns_fresh_id() {
    let name = Username::new("grace").expect("valid username");
    let first = User::register(name.clone());
    let second = User::register(name);
    assert_ne!(first.id(), second.id());
    assert_eq!(first.username().as_ref(), "grace");
}

#[rstest]
fn serialises_id_and_username(ada: User) {
    let value = serde_json::to_value(&ada).expect("serialise user");
    assert_eq!(value, json!({ "id": VALID_ID, "username": "ada" }));
}

#[rstest]
fn deserialise_validates_fields() {
    let bad = json!({ "id": VALID_ID, "username": "" });
    assert!(serde_json::from_value::<User>(bad).is_err());

    let good = json!({ "id": VALID_ID, "username": "ada" });
    let user: User = serde_json::from_value(good).expect("valid payload");
    assert_eq!(user.id().to_string(), VALID_ID);
}
