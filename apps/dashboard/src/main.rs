mod config;
mod errors;
mod models;
mod routes;
mod state;
mod tabular;
mod ui;
mod uploads;
mod workforce;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::workforce::source::WorkforceSource;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting workforce dashboards v{}", env!("CARGO_PKG_VERSION"));

    // Warm the workforce cache; a missing file only fails the requests that need it
    let workforce = Arc::new(WorkforceSource::fixed());
    if let Err(e) = workforce.table() {
        warn!(
            "Workforce data not available at startup ({}): {e}",
            workforce.path().display()
        );
    }

    info!("Upload limit: {} MB", config.max_upload_mb);

    let state = AppState {
        config: config.clone(),
        workforce,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
