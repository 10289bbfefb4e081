mod config;
mod errors;
mod letter;
mod models;
mod routes;
mod samples;
mod scoring;
mod session;
mod state;
mod tracker;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::scoring::issues::CannedIssues;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CVScore API v{}", env!("CARGO_PKG_VERSION"));

    // Issue list is canned for the demo; a real analysis engine slots in here.
    let state = AppState::new(&config, Arc::new(CannedIssues));
    {
        let session = state.session.read().await;
        if session.tracker.is_empty() {
            info!("Session initialized with an empty tracker");
        } else {
            info!(
                seeded = config.seed_tracker,
                "Session initialized with {} tracked jobs",
                session.tracker.len()
            );
        }
    }

    let mut app = build_router(state).layer(TraceLayer::new_for_http());
    if config.cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port)
        .parse()
        .context("invalid listen address")?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
