mod config;
mod contact;
mod content;
mod errors;
mod render;
mod routes;
mod shell;
mod state;
mod timeline;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::{EmailJsClient, InFlight};
use crate::content::Portfolio;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio site v{}", env!("CARGO_PKG_VERSION"));

    // Initialize email delivery
    if config.emailjs.is_placeholder() {
        warn!("EmailJS credentials are placeholders; contact submissions will fail until EMAILJS_* is set");
    }
    let delivery = EmailJsClient::new(
        config.emailjs_api_url.clone(),
        config.emailjs.clone(),
        Duration::from_secs(config.emailjs_timeout_secs),
    )?;
    info!("EmailJS client initialized ({})", config.emailjs_api_url);

    let portfolio = Portfolio::published();
    info!(
        "Content loaded: {} experiences, {} skills, {} education entries",
        portfolio.experiences.len(),
        portfolio.skills.len(),
        portfolio.education.len()
    );
    info!(
        "Theme: {}, static assets from {}",
        config.theme,
        config.static_dir.display()
    );

    // Build app state
    let state = AppState {
        portfolio,
        delivery: Arc::new(delivery),
        inflight: InFlight::default(),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
