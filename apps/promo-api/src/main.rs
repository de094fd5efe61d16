//! Promo API server entry point.
//!
//! Wiring order: config → catalog store → engine → router → serve.

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use promo_api::config::ApiConfig;
use promo_api::routes::{create_router, AppState};
use promo_core::CouponEngine;
use promo_store::FileCouponStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("promo_api=info,promo_store=info")),
        )
        .init();

    info!("Starting Promo API server...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(
        port = config.port,
        catalog = %config.catalog_path.display(),
        "Configuration loaded"
    );

    // Open the coupon catalog and build the engine
    let store = Arc::new(FileCouponStore::open(config.catalog_path)?);
    let state = Arc::new(AppState {
        engine: CouponEngine::new(store),
    });

    // Build the router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(%addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
