use std::{path::Path, sync::Arc};

pub mod core;
pub mod error_handler;
mod middleware_layer;
mod routes;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
};
use tracing::{error, info};

use crate::{
    core::{app_state::AppState, config::ApiConfig},
    error_handler::{AppError, AppResult},
    middleware_layer::json_extractor::json_error_mapper,
    routes::{chat::chat_route::chat, init_route::init_menu},
};

/// Boots the assistant and serves it until Ctrl+C.
pub async fn start() -> AppResult<()> {
    let cfg = ApiConfig::from_env();
    let state = Arc::new(AppState::from_env().await);
    let app = build_router(state, &cfg.frontend_dir);

    let listener = tokio::net::TcpListener::bind(&cfg.address)
        .await
        .map_err(|source| AppError::Bind {
            address: cfg.address.clone(),
            source,
        })?;

    info!(
        address = %cfg.address,
        frontend_dir = %cfg.frontend_dir.display(),
        "server listening"
    );

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Routes: `GET /init`, `POST /chat`, `GET /` (widget page), `/static/*` (assets).
pub fn build_router(state: Arc<AppState>, frontend_dir: &Path) -> Router {
    Router::new()
        .route("/init", get(init_menu))
        .route("/chat", post(chat))
        .layer(middleware::from_fn(json_error_mapper))
        .with_state(state)
        .route_service("/", ServeFile::new(frontend_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(frontend_dir))
        .layer(CorsLayer::very_permissive())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
