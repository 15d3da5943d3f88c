use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request")]
    InvalidRequest(#[source] serde_json::Error),

    #[error("Failed to render page")]
    Template(#[from] minijinja::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidRequest(e) => {
                warn!("Rejected frame packet: {}", e);
                StatusCode::BAD_REQUEST
            }
            AppError::Template(e) => {
                error!("Template error: {:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
