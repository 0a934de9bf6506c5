mod config;
mod content;
mod dates;
mod errors;
mod models;
mod portfolio;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::ContentStore;
use crate::dates::{Clock, FixedClock, SystemClock};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Build and validate the content snapshot
    let content = Arc::new(ContentStore::seeded().validated()?);

    // Pick the clock (PORTFOLIO_TODAY pins it for reproducible output)
    let clock: Arc<dyn Clock> = match config.today_override {
        Some(date) => {
            info!("Clock pinned to {date}");
            Arc::new(FixedClock(date))
        }
        None => Arc::new(SystemClock),
    };
    info!("Serving frontend bundle from {}", config.static_dir);

    // Build app state
    let state = AppState {
        content,
        clock,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
