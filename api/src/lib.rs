use std::sync::Arc;

mod core;
mod error_handler;
mod routes;

use axum::{Router, routing::any};
use tokio::signal;
use tracing::info;

use crate::routes::redeploy::redeploy_route::redeploy_route;

pub use crate::core::app_state::{AppState, Config, ConfigError};
pub use crate::error_handler::{AppError, AppResult};

pub async fn start() -> AppResult<()> {
    let config = Config::from_env()?;
    let bind_addr = config.bind_addr.clone();

    let state = Arc::new(AppState::new(config));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(AppError::Bind)?;

    info!(addr = %bind_addr, "redeploy backend listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Builds the application router.
///
/// Kept separate from [`start`] so integration tests can mount the real
/// router on an ephemeral port with a substituted [`AppState`].
///
/// The redeploy route is registered with `any()` because the handler owns
/// the method gate: a non-POST call must receive the fixed 405 JSON body,
/// which a router-level method filter would not produce.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/redeploy", any(redeploy_route))
        .with_state(state)
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    // Wait for the Ctrl+C signal
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
