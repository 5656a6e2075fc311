//! stock-server: inventory stock ledger
//!
//! REST service over PostgreSQL that:
//! - Registers products and per-shop stock rows
//! - Applies shelf increases and decreases, each with an audit record
//! - Serves filtered product, stock and paginated history queries

mod api;
mod config;
mod db;
mod error;
mod middleware;
mod services;
mod state;
mod store;

use std::sync::Arc;

use config::{Config, LogFormat};
use db::PgStore;
use state::AppState;
use tracing_subscriber::EnvFilter;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    init_tracing(config.log_format);

    tracing::info!("Starting stock-server (env: {})", config.environment);

    let store = PgStore::connect(&config).await?;
    let app = api::create_router(AppState::new(Arc::new(store.clone())));

    let http_addr = config.http_addr();
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("stock-server HTTP listening on {http_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("stock-server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stock_server=info,tower_http=info".into());
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, shutting down gracefully...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down gracefully...");
        }
    }
}
