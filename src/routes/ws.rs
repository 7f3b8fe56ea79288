use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::ws;
use crate::state::AppState;
use std::sync::Arc;

/// Create the WebSocket router
///
/// The `/ws` endpoint is intentionally unauthenticated: sessions are
/// short-lived, audio is ephemeral, and nothing persists beyond the
/// connection. Deployments that need access control should put the endpoint
/// behind a reverse proxy or validate a token during the HTTP upgrade.
pub fn create_ws_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ws", get(ws::ws_voice_handler))
        .layer(TraceLayer::new_for_http())
}
