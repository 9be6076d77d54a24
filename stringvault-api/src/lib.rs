//! REST API server for the string registry
//!
//! Thin HTTP plumbing over `stringvault-core`: routing, request/response
//! DTOs, and the error-to-status mapping. All registry semantics live in
//! the core crate.

mod error;
mod handlers;
mod state;
mod types;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ApiResult};
pub use state::AppState;
pub use types::*;

/// Build the API router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health))
        // String routes
        .route("/strings", post(handlers::create_string))
        .route("/strings", get(handlers::list_strings))
        .route(
            "/strings/filter-by-natural-language",
            get(handlers::query_strings),
        )
        .route("/strings/:target", get(handlers::get_string))
        .route("/strings/:target", delete(handlers::delete_string))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the address and serve the router until shutdown
pub async fn start_server(addr: std::net::SocketAddr, state: AppState) -> std::io::Result<()> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Stringvault API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {err}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
