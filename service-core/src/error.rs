use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed body for routes that do not exist.
pub const NOT_FOUND_DETAIL: &str = "Endpoint not found";
/// Fixed body for faults whose cause must not leak to the client.
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";
pub const METHOD_NOT_ALLOWED_DETAIL: &str = "Method not allowed";

#[derive(Debug, Error)]
pub enum AppError {
    /// Client fault: missing or malformed input.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Server fault raised by a handler; the message is returned as-is.
    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Endpoint not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

/// Uniform error body: `{"detail": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest(message.into())
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        AppError::ServerError(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::ServerError(_) | AppError::InternalError(_) | AppError::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::BadRequest(msg) | AppError::ServerError(msg) => msg.clone(),
            AppError::NotFound => NOT_FOUND_DETAIL.to_string(),
            AppError::MethodNotAllowed => METHOD_NOT_ALLOWED_DETAIL.to_string(),
            AppError::InternalError(_) | AppError::ConfigError(_) => {
                INTERNAL_ERROR_DETAIL.to_string()
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Surface the first declared message; fall back to the full report.
        let message = errors
            .field_errors()
            .into_values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());
        AppError::BadRequest(message)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(format!("Invalid query parameters: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(format!("Invalid path parameter: {}", rejection.body_text()))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::InternalError(err) | AppError::ConfigError(err) => {
                tracing::error!(error = ?err, "Request failed with internal error");
            }
            AppError::ServerError(msg) => {
                tracing::error!(detail = %msg, "Request failed with server error");
            }
            AppError::BadRequest(msg) => {
                tracing::debug!(detail = %msg, "Rejected client request");
            }
            AppError::NotFound | AppError::MethodNotAllowed => {}
        }

        (
            status,
            Json(ErrorResponse {
                detail: self.detail(),
            }),
        )
            .into_response()
    }
}
