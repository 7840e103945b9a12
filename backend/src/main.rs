//! Exercise tracker entry-point: reads settings, prepares storage and runs the HTTP server.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use exercise_tracker::inbound::http::health::HealthState;
use exercise_tracker::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{ServerConfig, create_server, server_settings_from_env};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }

    let settings = server_settings_from_env(&DefaultEnv::new()).map_err(std::io::Error::other)?;
    let mut config = ServerConfig::new(settings.bind_addr);

    match settings.database_url.as_deref() {
        Some(url) => {
            run_pending_migrations(url)
                .await
                .map_err(std::io::Error::other)?;
            let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_max_size))
                .await
                .map_err(std::io::Error::other)?;
            config = config.with_db_pool(pool);
        }
        None => warn!("DATABASE_URL not set; records are kept in memory and lost on exit"),
    }

    let bind_addr = config.bind_addr();
    let store = config.store_kind();
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, %store, "exercise tracker listening");

    let result = server.await;
    health_state.mark_unhealthy();
    result
}
