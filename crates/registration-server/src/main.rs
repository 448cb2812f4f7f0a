//! SOS Taxi registration service - Entry point.

use anyhow::{Context, Result};
use registration_server::{
    api::{create_router, create_router_with_cors, AppState},
    config::Config,
    delivery::build_sender,
    session::SessionStore,
};
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SOS Taxi registration service");

    let sender = build_sender(&config.delivery)?;
    let sessions = SessionStore::new(config.session.ttl);
    let state = AppState::new(sessions, sender);

    let app = if config.server.cors_permissive {
        create_router_with_cors(state)
    } else {
        create_router(state)
    };

    let ip: IpAddr = config
        .server
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.server.listen_addr))?;
    let addr = SocketAddr::new(ip, config.server.port);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received shutdown signal");
    }
}
