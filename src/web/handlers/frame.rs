use axum::{body::Bytes, extract::State, response::Html};
use minijinja::context;
use std::sync::Arc;
use tracing::{debug, info};

use crate::frame::{self, packet::FramePacket};
use crate::web::error::AppError;
use crate::web::request_url::RequestUrl;
use crate::web::state::AppState;
use crate::web::templates::render_template;

/// Answers a button press with the next frame.
///
/// The body is read raw rather than through `Json` so a missing or wrong
/// content type is treated like any other unparseable packet.
pub async fn interaction_handler(
    State(state): State<Arc<AppState>>,
    RequestUrl(post_url): RequestUrl,
    body: Bytes,
) -> Result<Html<String>, AppError> {
    let packet = FramePacket::from_slice(&body).map_err(AppError::InvalidRequest)?;
    let data = &packet.untrusted_data;

    info!(
        fid = ?data.fid,
        button = ?data.button_index(),
        "Frame interaction"
    );
    debug!(
        url = ?data.url,
        message_hash = ?data.message_hash,
        timestamp = ?data.timestamp,
        network = ?data.network,
        cast = ?data.cast_id.as_ref().map(|c| (c.fid, &c.hash)),
        message_bytes = packet
            .trusted_data
            .as_ref()
            .and_then(|t| t.message_bytes.as_ref())
            .map_or(0, String::len),
        "Frame packet details (unverified)"
    );

    let meta = frame::interaction_frame(&state.config.frame, data, post_url);
    let page = render_template(&state.template_env, "frame.html", context! { meta => meta })?;

    Ok(Html(page))
}
