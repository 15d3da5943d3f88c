use axum::{extract::State, response::Html};
use minijinja::context;
use std::sync::Arc;

use crate::frame;
use crate::web::error::AppError;
use crate::web::request_url::RequestUrl;
use crate::web::state::AppState;
use crate::web::templates::render_template;

// Upload page, doubling as the frame's first view
pub async fn index_handler(
    State(state): State<Arc<AppState>>,
    RequestUrl(post_url): RequestUrl,
) -> Result<Html<String>, AppError> {
    let meta = frame::initial_frame(&state.config.frame, post_url);

    let page = render_template(
        &state.template_env,
        "index.html",
        context! {
            meta => meta,
            storage => &state.config.storage,
        },
    )?;

    Ok(Html(page))
}
