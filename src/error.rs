use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("{source_name} did not respond within {after_ms}ms")]
    Timeout {
        source_name: &'static str,
        after_ms: u64,
    },

    #[error("{source_name} returned status {status}")]
    UpstreamStatus {
        source_name: &'static str,
        status: u16,
    },

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Coarse classification of upstream failures, used for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    TransportFailure,
    Timeout,
    UpstreamError,
    Local,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FailureKind::TransportFailure => "transport_failure",
            FailureKind::Timeout => "timeout",
            FailureKind::UpstreamError => "upstream_error",
            FailureKind::Local => "local",
        };
        f.write_str(label)
    }
}

impl AppError {
    pub fn kind(&self) -> FailureKind {
        match self {
            AppError::HttpClient(e) if e.is_timeout() => FailureKind::Timeout,
            // reqwest reports undecodable bodies as its own error type
            AppError::HttpClient(e) if e.is_decode() || e.is_status() => {
                FailureKind::UpstreamError
            }
            AppError::HttpClient(_) => FailureKind::TransportFailure,
            AppError::Timeout { .. } => FailureKind::Timeout,
            AppError::UpstreamStatus { .. } | AppError::ExternalApi(_) => {
                FailureKind::UpstreamError
            }
            AppError::InvalidInput(_) | AppError::Storage(_) | AppError::Internal(_) => {
                FailureKind::Local
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Timeout { .. } => (StatusCode::GATEWAY_TIMEOUT, self.to_string()),
            AppError::ExternalApi(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::HttpClient(_) | AppError::UpstreamStatus { .. } => {
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
            AppError::Storage(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
