//! Native runtime pieces: the file-backed durable store, the tokio-driven
//! session component, and the static host for the web bundle.

pub mod handlers;
pub mod session;
pub mod store;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::info;

/// Routes for the web bundle in `dist`. Unknown paths fall back to
/// `index.html` so client-side routes survive a reload.
pub fn router(dist: &Path) -> Router {
    let index = ServeFile::new(dist.join("index.html"));
    let assets = ServeDir::new(dist).fallback(index);

    Router::new()
        .route("/health", get(handlers::health))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}

/// Serves the web bundle until the process is stopped.
///
/// # Errors
/// Returns an error if the bundle directory is missing or the listener cannot bind.
pub async fn new(port: u16, dist: PathBuf) -> Result<()> {
    if !dist.join("index.html").is_file() {
        anyhow::bail!(
            "no index.html in {}; build the web app first (trunk build --release)",
            dist.display()
        );
    }

    let listener = TcpListener::bind(format!("::0:{port}"))
        .await
        .with_context(|| format!("failed to bind port {port}"))?;

    info!(
        "serving {} on {}",
        dist.display(),
        listener.local_addr()?
    );

    axum::serve(listener, router(&dist).into_make_service()).await?;

    Ok(())
}
