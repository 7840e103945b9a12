//! Domain primitives, aggregates and use-case services.
//!
//! Types here are immutable once constructed and document their invariants
//! and serialisation contracts in their Rustdoc. Services implement the
//! driving ports in [`ports`] over the driven repository ports.
//!
//! Public surface:
//! - `DomainError` / `ErrorCode`: transport-agnostic failure payload.
//! - `User`, `Exercise`, `ExerciseLog`: records handled by the API.
//! - `UserService`, `ExerciseService`: use-case implementations.

pub mod calendar;
pub mod error;
pub mod exercise;
pub mod exercise_service;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::calendar::{CALENDAR_FORMAT, format_calendar_date, parse_calendar_date};
pub use self::error::{DomainError, DomainErrorValidationError, ErrorCode};
pub use self::exercise::{
    Description, DurationInput, Exercise, ExerciseDraft, ExerciseId, ExerciseLog,
    ExerciseValidationError, LogFilter, Minutes,
};
pub use self::exercise_service::{ExerciseService, INVALID_INPUT_MESSAGE, USER_NOT_FOUND_MESSAGE};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserValidationError, Username};
pub use self::user_service::{USERNAME_TAKEN_MESSAGE, UserService};
