//! WebServer-specific error types and their HTTP rendering

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use planner::PlannerError;
use shared::{process_error, process_warn, ProcessId};

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error(transparent)]
    Planner(#[from] PlannerError),

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WebServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            WebServerError::Planner(e) => match e {
                PlannerError::Validation { .. } => StatusCode::BAD_REQUEST,
                PlannerError::Recommender(_) | PlannerError::DailyOutfit(_) => StatusCode::BAD_GATEWAY,
                PlannerError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            WebServerError::ServerStartup(_) | WebServerError::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            WebServerError::Planner(e) => e.kind(),
            WebServerError::InvalidRequest { .. } => "invalid_request",
            WebServerError::ServerStartup(_) => "startup",
            WebServerError::IoError(_) => "io",
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            WebServerError::Planner(e) => e.is_retryable(),
            _ => false,
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            process_error!(ProcessId::current(), "❌ {} ({}): {}", status, self.kind(), self);
        } else {
            process_warn!(ProcessId::current(), "⚠️ {} ({}): {}", status, self.kind(), self);
        }

        let body = json!({
            "status": "error",
            "kind": self.kind(),
            "message": self.to_string(),
            "retryable": self.is_retryable(),
        });
        (status, Json(body)).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
