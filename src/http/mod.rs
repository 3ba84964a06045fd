//! HTTP surface of the publishing API: routing, request handlers, error
//! mapping, and static serving of uploads and presentation assets.

pub mod error;
pub mod handlers;
mod statics;

pub use error::ApiError;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::sync::Mutex;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::storage::Store;
use crate::uploads::UploadStore;

/// Shared server state. The store mutex serializes the read-modify-write
/// cycle on the collection files so concurrent creates cannot lose writes.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<Store>>,
    pub uploads: Arc<UploadStore>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Open the store and uploads directory, creating both when absent.
    pub fn new(config: Config) -> Result<Self> {
        let store = Store::open(&config.data_dir)?;
        let uploads = UploadStore::open(&config.uploads_dir)?;
        Ok(Self {
            store: Arc::new(Mutex::new(store)),
            uploads: Arc::new(uploads),
            config: Arc::new(config),
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;
    Router::new()
        .route("/api/status", get(handlers::status))
        .route("/api/login", post(handlers::login))
        .route(
            "/api/news",
            get(handlers::list_news).post(handlers::create_news),
        )
        .route(
            "/api/news/{id}",
            get(handlers::get_news).delete(handlers::delete_news),
        )
        .route(
            "/api/interviews",
            get(handlers::list_interviews).post(handlers::create_interview),
        )
        .route(
            "/api/interviews/{id}",
            get(handlers::get_interview).delete(handlers::delete_interview),
        )
        .route("/uploads/{filename}", get(statics::serve_upload))
        .fallback(statics::serve_public)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

/// Run the server until ctrl-c.
pub async fn serve(config: Config) -> Result<()> {
    let port = config.port;
    let state = AppState::new(config)?;
    info!(
        port,
        data_dir = %state.config.data_dir.display(),
        uploads_dir = %state.config.uploads_dir.display(),
        "pressroom server listening"
    );

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}
