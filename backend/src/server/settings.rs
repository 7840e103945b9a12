//! Server settings read from environment variables.
//!
//! Blank values count as unset so a `PORT=` left in an env file falls back
//! to the default.

use mockable::Env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const PORT_ENV: &str = "PORT";
pub const BIND_HOST_ENV: &str = "BIND_HOST";
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub const DATABASE_POOL_MAX_SIZE_ENV: &str = "DATABASE_POOL_MAX_SIZE";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Errors raised while reading server settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServerSettingsError {
    #[error("{name} must be {expected}, got {value:?}")]
    InvalidValue {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl ServerSettingsError {
    fn invalid(name: &'static str, value: &str, expected: &'static str) -> Self {
        Self::InvalidValue {
            name,
            value: value.to_owned(),
            expected,
        }
    }
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub bind_addr: SocketAddr,
    pub database_url: Option<String>,
    pub pool_max_size: u32,
}

/// Read [`ServerSettings`] from `env`.
///
/// # Errors
/// Returns [`ServerSettingsError::InvalidValue`] when a variable is set but
/// cannot be parsed.
pub fn server_settings_from_env<E: Env>(env: &E) -> Result<ServerSettings, ServerSettingsError> {
    let port = match non_blank(env, PORT_ENV) {
        Some(raw) => raw
            .parse::<u16>()
            .map_err(|_| ServerSettingsError::invalid(PORT_ENV, &raw, "a TCP port"))?,
        None => DEFAULT_PORT,
    };

    let host = match non_blank(env, BIND_HOST_ENV) {
        Some(raw) => raw
            .parse::<IpAddr>()
            .map_err(|_| ServerSettingsError::invalid(BIND_HOST_ENV, &raw, "an IP address"))?,
        None => DEFAULT_HOST,
    };

    let pool_max_size = match non_blank(env, DATABASE_POOL_MAX_SIZE_ENV) {
        Some(raw) => raw
            .parse::<u32>()
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| {
                ServerSettingsError::invalid(DATABASE_POOL_MAX_SIZE_ENV, &raw, "a positive integer")
            })?,
        None => DEFAULT_POOL_MAX_SIZE,
    };

    Ok(ServerSettings {
        bind_addr: SocketAddr::new(host, port),
        database_url: non_blank(env, DATABASE_URL_ENV),
        pool_max_size,
    })
}

fn non_blank<E: Env>(env: &E, name: &str) -> Option<String> {
    env.string(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
