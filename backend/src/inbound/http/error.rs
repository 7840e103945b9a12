//! HTTP mapping for domain failures.
//!
//! Clients branch on payload shape rather than status: caller mistakes
//! (invalid input, unknown user, taken username) are reported as `200`
//! responses carrying `{"error": "..."}`. Everything else is a server fault
//! answered with `500` and a fixed per-endpoint message; the underlying cause
//! is logged with the trace id and never returned.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{DomainError, TRACE_ID_HEADER};

/// Error payload shared by business errors and faults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable failure description.
    #[schema(example = "User not found")]
    pub error: String,
}

/// Domain error paired with the message to show if it turns out to be a fault.
#[derive(Debug, Clone)]
pub struct ApiFailure {
    error: DomainError,
    fault_message: &'static str,
}

impl ApiFailure {
    pub fn new(error: DomainError, fault_message: &'static str) -> Self {
        Self {
            error,
            fault_message,
        }
    }

    /// Underlying domain error.
    #[must_use]
    pub fn domain_error(&self) -> &DomainError {
        &self.error
    }

    /// Whether the failure is a server fault rather than a business error.
    #[must_use]
    pub fn is_fault(&self) -> bool {
        !self.error.code().is_caller_error()
    }

    fn body(&self) -> ErrorBody {
        let message = if self.is_fault() {
            self.fault_message
        } else {
            self.error.message()
        };
        ErrorBody {
            error: message.to_owned(),
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.fault_message, self.error)
    }
}

impl ResponseError for ApiFailure {
    fn status_code(&self) -> StatusCode {
        if self.is_fault() {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::OK
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.is_fault() {
            error!(
                trace_id = self.error.trace_id().unwrap_or("-"),
                code = ?self.error.code(),
                cause = self.error.message(),
                details = ?self.error.details(),
                "{}",
                self.fault_message
            );
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.error.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(self.body())
    }
}

/// Attach the endpoint's fault message to a domain result.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::DomainError;
/// use exercise_tracker::inbound::http::error::FaultContext;
///
/// let result: Result<(), DomainError> = Err(DomainError::internal("socket closed"));
/// let failure = result.or_fault("Could not retrieve users").expect_err("fault");
/// assert!(failure.is_fault());
/// ```
pub trait FaultContext<T> {
    fn or_fault(self, fault_message: &'static str) -> Result<T, ApiFailure>;
}

impl<T> FaultContext<T> for Result<T, DomainError> {
    fn or_fault(self, fault_message: &'static str) -> Result<T, ApiFailure> {
        self.map_err(|error| ApiFailure::new(error, fault_message))
    }
}

/// Result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiFailure>;
