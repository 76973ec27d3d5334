//! Eco-report server: fuses live air-quality, historical archive and
//! traffic flow data into per-city reports.

mod api;
mod config;
mod error;
mod providers;
mod report;
mod state;
mod traffic;

use anyhow::Result;
use axum::routing::get;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("eco_server=debug".parse()?),
        )
        .init();

    tracing::info!("Starting eco-report server...");

    let config = Config::from_env();
    let port = config.server_port;
    if config.waqi_api_key.is_none() {
        tracing::warn!("ECO_WAQI_API_KEY not set; report requests will fail");
    }
    if config.tomtom_api_key.is_none() {
        tracing::warn!("ECO_TOMTOM_API_KEY not set; traffic sections will be empty");
    }

    let state = Arc::new(AppState::new(config));

    let app = api::routes()
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
