// src/main.rs
mod routes;
mod handlers;
mod models;
mod database;
mod middleware;
mod state;
mod dtos;
mod error;
mod auth;
mod config;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::database::MongoStore;

/// Ports tried after the configured one when it is already taken.
const PORT_FALLBACK_RANGE: u16 = 20;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables before the filter reads RUST_LOG
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    tracing::info!(?config, "Configuration loaded");

    let client = database::create_client(&config.database_uri).await?;
    let store = MongoStore::new(&client.database(&config.database_name));
    store.ensure_indexes().await?;

    let app_state = state::AppState::new(Arc::new(store), config.jwt_secret.as_str());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_router(&app_state)
        .layer(cors)
        .with_state(app_state);

    let listener = bind_listener(&config).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    client.shutdown().await;
    tracing::info!("Server stopped, database client closed");
    Ok(())
}

// Try port..port+20 to avoid crash when address is in use
async fn bind_listener(config: &Config) -> std::io::Result<TcpListener> {
    let mut last_err = None;
    for offset in 0..=PORT_FALLBACK_RANGE {
        let port = config.port.saturating_add(offset);
        let addr = SocketAddr::from((config.host, port));
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                tracing::info!("Server running on {}", addr);
                return Ok(listener);
            }
            Err(e) => {
                if offset == 0 { tracing::warn!(%addr, error=%e, "Port in use, trying next"); }
                last_err = Some(e);
            }
        }
    }
    tracing::error!("Failed to bind to any port starting at {} on {}", config.port, config.host);
    Err(last_err.unwrap_or_else(|| std::io::Error::other("no port available")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error=%e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => { sig.recv().await; }
            Err(e) => tracing::error!(error=%e, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
