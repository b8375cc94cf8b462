//! Seaway server - marine weather and route optimization backend

mod api;
mod config;
mod state;

use anyhow::Result;
use axum::routing::get;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("seaway_server=debug".parse()?),
        )
        .init();

    tracing::info!("Starting seaway server...");

    let config = Config::from_env();
    let port = config.server_port;
    let state = Arc::new(AppState::new(&config));

    // Build the app
    let app = api::create_router()
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // Run server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
