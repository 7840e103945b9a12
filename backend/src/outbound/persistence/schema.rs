//! Diesel table definitions for the exercise tracker schema.
//!
//! Kept in step with the SQL under `backend/migrations`.

diesel::table! {
    /// Registered users. `username` carries a unique index.
    users (id) {
        id -> Uuid,
        username -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Logged exercises. `user_id` is not a foreign key.
    exercises (id) {
        id -> Uuid,
        user_id -> Uuid,
        description -> Text,
        /// Minutes.
        duration -> Float8,
        date -> Timestamptz,
        /// Insertion instant, used to order exercises sharing a date.
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, exercises);
