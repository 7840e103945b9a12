//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{InMemoryExerciseRepository, InMemoryUserRepository};

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// 2024-06-01 10:00 UTC, a Saturday.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0)
        .single()
        .expect("valid fixture instant")
}

/// Rendered form of [`fixed_now`].
pub const FIXED_TODAY: &str = "Sat Jun 01 2024";

/// Handler state over fresh in-memory stores and a [`FixedClock`].
pub fn in_memory_state() -> web::Data<HttpState> {
    web::Data::new(HttpState::from_repositories(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryExerciseRepository::new()),
        Arc::new(FixedClock(fixed_now())),
    ))
}
