use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::utils::ValidatedJson;

use crate::dtos::generate::{GenerateRequest, GenerateResponse};
use crate::services::{generate_site, metrics};
use crate::AppState;

/// Generate a website from a prompt
///
/// Returns a fixed placeholder page with the prompt interpolated; no model is called.
#[utoipa::path(
    post,
    path = "/api/v1/generate/generate-website",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Placeholder site generated", body = GenerateResponse),
        (status = 400, description = "Prompt missing or body malformed", body = crate::dtos::ErrorResponse),
        (status = 500, description = "Rendering failed", body = crate::dtos::ErrorResponse)
    ),
    tag = "Generation"
)]
#[tracing::instrument(skip(state, request))]
pub async fn generate_website(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let prompt = request.prompt.unwrap_or_default();

    let site = generate_site(&prompt, state.config.generation.escape_prompt)
        .map_err(|e| AppError::server_error(format!("Error generating website: {}", e)))?;

    metrics::record_generation();
    tracing::info!(prompt_chars = prompt.chars().count(), "Website generated");

    Ok(Json(GenerateResponse {
        html: site.html,
        css: site.css,
        js: site.js,
    }))
}
