use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::WebConfig;
use crate::web::state::AppState;

/// The absolute URL a request was received on. Frames use it as their
/// post-back target so the next interaction lands on the same handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl(pub String);

impl FromRequestParts<Arc<AppState>> for RequestUrl {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        Ok(RequestUrl(resolve(parts, &state.config.web)))
    }
}

const WEB_SCHEMES: [&str; 2] = ["http", "https"];

fn resolve(parts: &Parts, web: &WebConfig) -> String {
    let uri = &parts.uri;
    if uri.scheme().is_some() && uri.authority().is_some() {
        return uri.to_string();
    }

    // first hop wins when proxies chain the header
    let scheme = header_str(parts, "x-forwarded-proto")
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .and_then(|v| WEB_SCHEMES.into_iter().find(|s| v.eq_ignore_ascii_case(s)))
        .unwrap_or("http");

    let host = header_str(parts, header::HOST.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}:{}", web.host, web.port));

    let path = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    format!("{scheme}://{host}{path}")
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
