use axum::{http::header, response::IntoResponse, Json};

use crate::dtos::system::{ApiEndpoints, ApiStatusResponse, HealthResponse, RootResponse};
use crate::services::get_metrics;

pub const SERVICE_NAME: &str = "suresite-backend";

/// Root endpoint - liveness
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "API is running", body = RootResponse)),
    tag = "Observability"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "SureSite API is running!".to_string(),
        status: "healthy".to_string(),
    })
}

/// Service health check
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse)),
    tag = "Observability"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

/// API capability descriptor
#[utoipa::path(
    get,
    path = "/api/v1/status",
    responses((status = 200, description = "API version and endpoint groups", body = ApiStatusResponse)),
    tag = "Observability"
)]
pub async fn api_status() -> Json<ApiStatusResponse> {
    Json(ApiStatusResponse {
        status: "active".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ApiEndpoints {
            generate: "/api/v1/generate".to_string(),
            ai: "/api/v1/ai".to_string(),
            projects: "/api/v1/projects".to_string(),
        },
    })
}

pub async fn metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        get_metrics(),
    )
}
