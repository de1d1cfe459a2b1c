//! Gateway entry-point: loads settings, wires upstream adapters, and serves HTTP.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use movies_gateway::config::GatewaySettings;
use movies_gateway::inbound::http::health::HealthState;
use server::{ServerConfig, build_http_state, create_server, drain_on};

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

    let settings = GatewaySettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let http_state = build_http_state(&settings)?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(bind_addr, http_state),
    )?;
    actix_web::rt::spawn(drain_on(ctrl_c(), health_state, server.handle()));
    server.await
}

async fn ctrl_c() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
