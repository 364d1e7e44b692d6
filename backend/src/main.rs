//! Backend entry-point: loads settings, selects the store and serves HTTP.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use plod_backend::inbound::http::health::HealthState;
use plod_backend::outbound::memory::load_seed_file;
use plod_backend::outbound::persistence::{DbPool, PoolConfig};
use plod_backend::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AppSettings::load().map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let config = server_config(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).wrap_err("failed to start HTTP server")?;
    info!(bind_addr = %settings.bind_addr(), "character PLOD server listening");
    server.await.wrap_err("HTTP server terminated with an error")?;
    Ok(())
}

async fn server_config(settings: &AppSettings) -> Result<ServerConfig> {
    let config = ServerConfig::new(settings.bind_addr());

    if let Some(url) = settings.database_url() {
        if settings.seed_path().is_some() {
            warn!("seed path ignored because a database URL is configured");
        }
        let mut pool_config = PoolConfig::new(url);
        if let Some(max) = settings.db_max_connections {
            pool_config = pool_config.with_max_size(max);
        }
        let pool = DbPool::new(pool_config)
            .await
            .wrap_err("failed to build database pool")?;
        return Ok(config.with_db_pool(pool));
    }

    match settings.seed_path() {
        Some(path) => {
            let records = load_seed_file(path).wrap_err("failed to load seed records")?;
            Ok(config.with_seed(records))
        }
        None => Ok(config),
    }
}
