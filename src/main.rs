//! HireHub Server — job board API
//!
//! Main entry point that wires the crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use hirehub_api::router::build_router;
use hirehub_api::state::AppState;
use hirehub_core::config::AppConfig;
use hirehub_core::error::AppError;
use hirehub_storage::ResumeStore;
use hirehub_store::MemStore;

#[tokio::main]
async fn main() {
    let env = std::env::var("HIREHUB_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting HireHub v{}", env!("CARGO_PKG_VERSION"));

    let resumes = ResumeStore::new(
        &config.storage.upload_dir,
        config.storage.max_upload_size_bytes,
    )
    .await?;
    tracing::info!(dir = %config.storage.upload_dir, "Resume storage ready");

    let store = Arc::new(MemStore::new());
    if config.demo.seed_sample_jobs {
        let seeded = hirehub_store::seed::sample_jobs(&store);
        tracing::info!(count = seeded.len(), "Seeded sample job listings");
    }

    let state = AppState {
        config: Arc::new(config.clone()),
        store,
        resumes: Arc::new(resumes),
    };

    let router = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Resolve when ctrl-c is received
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
