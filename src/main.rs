mod allow_list;
mod config;
mod errors;
mod handlers;
mod metrics;
mod models;
mod state;

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Args;
use crate::handlers::{check_handler, health_handler, metrics_handler};
use crate::state::AppState;

// this is main async function with tokio
#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&args.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = Arc::new(AppState::default());
    info!("allow-list loaded with {} users", state.allow_list.len());

    let app = build_router(state);

    let addr = args.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("could not bind to {}", addr))?;

    info!("whitelist service listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("error while running the whitelist service")?;

    info!("whitelist service stopped");
    Ok(())
}

// creating the router with routes
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(check_handler))
        .route("/check", post(check_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received, draining connections");
}
