use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

// GET renders the upload page / first frame, POST answers button presses.
// Both live on `/` because frames post back to the URL they were served from.
pub fn frame_routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/",
        get(handlers::ui::index_handler).post(handlers::frame::interaction_handler),
    )
}
