use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "SureSite API is running!")]
    pub message: String,
    #[schema(example = "healthy")]
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "suresite-backend")]
    pub service: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiEndpoints {
    #[schema(example = "/api/v1/generate")]
    pub generate: String,
    #[schema(example = "/api/v1/ai")]
    pub ai: String,
    #[schema(example = "/api/v1/projects")]
    pub projects: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiStatusResponse {
    #[schema(example = "active")]
    pub status: String,
    #[schema(example = "1.0.0")]
    pub version: String,
    pub endpoints: ApiEndpoints,
}
