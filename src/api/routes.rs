use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let upload_limit = state.config.max_upload_size as usize;

    Router::new()
        // Kiosk page
        .route("/", get(handlers::index))
        // Exhibit lookup
        .route("/ask", post(handlers::ask))
        // Uploads
        .route(
            "/upload",
            post(handlers::upload_video).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/uploads/:filename", get(handlers::serve_upload))
        // Internal
        .route("/_internal/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
