//! HTTP server initialization and runtime setup.
//!
//! Handles dataset loading and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::TrackRepository;
use crate::infrastructure::dataset::InMemoryTrackRepository;
use crate::routes::app_router;
use crate::state::{AppState, DashboardSettings};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory dataset from `DATASET_PATH`
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - The dataset cannot be loaded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let tracks = load_dataset(&config).await?;

    let state = AppState::new(tracks, DashboardSettings::from(&config));
    let app = app_router(state, &config);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Loads the dataset on the blocking pool.
async fn load_dataset(config: &Config) -> Result<Arc<dyn TrackRepository>> {
    let path = config.dataset_path.clone();
    tracing::info!("Loading dataset from {}", path.display());

    let repository = tokio::task::spawn_blocking(move || InMemoryTrackRepository::from_csv_path(&path))
        .await
        .context("Dataset loading task failed")?
        .context("Failed to load dataset")?;

    let rows = repository.count();
    if rows == 0 {
        tracing::warn!("Dataset is empty; charts will render without data");
    } else {
        tracing::info!(rows, "Dataset loaded");
    }

    let tracks: Arc<dyn TrackRepository> = Arc::new(repository);
    Ok(tracks)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
