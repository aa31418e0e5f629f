//! Backend entry-point: loads settings, migrates the schema and serves the
//! REST API with its health probes and OpenAPI docs.

mod server;

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use acronyms::inbound::http::health::HealthState;
use acronyms::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use acronyms::settings::{DatabaseSettings, HttpSettings};

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    // Settings come from the environment and config files only.
    let args = [OsString::from("acronyms")];
    let database = DatabaseSettings::load_from_iter(args.clone())
        .map_err(|err| std::io::Error::other(format!("load database settings: {err}")))?;
    let http = HttpSettings::load_from_iter(args)
        .map_err(|err| std::io::Error::other(format!("load http settings: {err}")))?;

    let pool_config =
        PoolConfig::new(database.database_url()).with_max_size(database.pool_max_size);
    info!(database = %pool_config.redacted_url(), "applying migrations");

    let database_url = pool_config.database_url().to_owned();
    let applied = tokio::task::spawn_blocking(move || run_migrations(&database_url))
        .await
        .map_err(std::io::Error::other)?
        .map_err(std::io::Error::other)?;
    info!(applied, "schema up to date");

    let pool = DbPool::new(pool_config)
        .await
        .map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(http.bind_addr()).with_db_pool(pool);
    info!(addr = %config.bind_addr(), "starting server");
    let server = create_server(health_state, config)?;
    server.await
}
