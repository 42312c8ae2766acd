//! HTTP surface: one listing page and six form endpoints.

mod error;
mod forms;
mod handlers;
mod page;
mod request_log;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use axum::Router;
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// Shared, read-only request context. Holds no connection: every request
/// opens its own.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let db_path = config.database_path();
        Self {
            config: Arc::new(config),
            db_path: Arc::new(db_path),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(|| async { "ok" }))
        .route("/add", post(handlers::add_record))
        .route("/delete/{id}", post(handlers::delete_record))
        .route("/reset", post(handlers::reset))
        .route("/add_semana", post(handlers::add_week))
        .route("/delete_semana/{id}", post(handlers::delete_week))
        .layer(axum::middleware::from_fn(request_log::log_request))
        .with_state(state)
}

/// Run `f` against a freshly opened connection on the blocking pool.
/// The connection is dropped when `f` returns, on every path.
pub(crate) async fn with_db<F, T>(state: &AppState, f: F) -> AppResult<T>
where
    F: FnOnce(&mut DbPool, &Config) -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || {
        let mut pool = DbPool::new(state.db_path.as_path())?;
        f(&mut pool, &state.config)
    })
    .await
    .map_err(|e| AppError::Other(format!("database task failed: {e}")))?
}

/// Install the global tracing subscriber (`RUST_LOG`, default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

pub async fn serve(config: Config, addr: SocketAddr) -> AppResult<()> {
    let state = AppState::new(config);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
