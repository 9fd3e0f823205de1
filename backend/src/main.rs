//! Member roster entry-point: loads settings, prepares the member store and
//! serves the REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use roster::inbound::http::health::HealthState;
use roster::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{ServerConfig, ServerSettings, create_server};

async fn connect_store(
    config: ServerConfig,
    settings: &ServerSettings,
) -> std::io::Result<ServerConfig> {
    let Some(database_url) = settings.database_url() else {
        return Ok(config);
    };

    if settings.run_migrations() {
        run_pending_migrations(database_url)
            .await
            .map_err(std::io::Error::other)?;
    }

    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.db_pool_max_size()),
    )
    .await
    .map_err(std::io::Error::other)?;
    info!("member store connected");
    Ok(config.with_db_pool(pool))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let config = ServerConfig::from_settings(&settings).map_err(std::io::Error::other)?;
    let config = connect_store(config, &settings).await?;
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(server::build_metrics()?));

    let bind_addr = config.bind_addr;
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "member roster listening");

    let result = server.await;
    health_state.mark_unhealthy();
    result
}
