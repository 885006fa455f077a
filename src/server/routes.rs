//! Route table for the dashboard server.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::{handlers, AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/search", get(handlers::search))
        .route("/api/meta", get(handlers::meta))
        .route("/static/style.css", get(handlers::stylesheet))
        .route("/static/app.js", get(handlers::script))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
