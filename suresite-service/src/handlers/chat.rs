use axum::Json;
use service_core::error::AppError;
use service_core::utils::ValidatedJson;

use crate::dtos::chat::{ChatReply, ChatRequest, ChatResponse};
use crate::services::metrics;

fn placeholder_reply(content: &str) -> String {
    format!(
        "I received your message: '{}'. This is a placeholder response from the AI chat endpoint.",
        content
    )
}

/// Chat with the assistant
///
/// Echoes the message content into a fixed reply. `history` is accepted and ignored.
#[utoipa::path(
    post,
    path = "/api/v1/ai/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Placeholder reply", body = ChatResponse),
        (status = 400, description = "Message content missing or body malformed", body = crate::dtos::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::dtos::ErrorResponse)
    ),
    tag = "AI"
)]
#[tracing::instrument(skip(request))]
pub async fn chat_with_ai(
    ValidatedJson(request): ValidatedJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let content = request.content();

    metrics::record_chat_message();
    tracing::info!(
        content_chars = content.chars().count(),
        history_len = request.history_len(),
        "Chat message received"
    );

    Ok(Json(ChatResponse {
        status: "success".to_string(),
        message: ChatReply {
            role: "assistant".to_string(),
            content: placeholder_reply(content),
        },
    }))
}
