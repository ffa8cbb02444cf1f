use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Gateway error kinds. Authentication failures cover everything that can
/// go wrong while obtaining a bearer token (transport, parse, upstream
/// envelope status, missing token); upstream errors carry the error code
/// of the resource vertical that raised them.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    Authentication(String),

    #[error("{message}")]
    Upstream {
        code: &'static str,
        message: String,
    },
}

impl GatewayError {
    pub fn error_code(&self) -> &str {
        match self {
            GatewayError::Authentication(_) => "AUTH_ERROR",
            GatewayError::Upstream { code, .. } => code,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Authentication(_) => StatusCode::UNAUTHORIZED,
            GatewayError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

/// JSON body returned to gateway clients for any failed request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub error_code: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        error!("request failed with {}: {}", self.error_code(), self);
        let body = ApiErrorBody {
            error_code: self.error_code().to_owned(),
            message: self.to_string(),
            timestamp: Utc::now(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
