use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::api;
use crate::state::AppState;
use std::sync::Arc;

/// Create the REST API router
///
/// CORS is wide open: the HTTP surface only reports liveness and carries no
/// session data.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(api::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
