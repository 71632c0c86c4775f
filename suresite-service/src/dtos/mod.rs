pub mod chat;
pub mod export;
pub mod generate;
pub mod projects;
pub mod system;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Documentation mirror of `service_core::error::ErrorResponse`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Prompt is required")]
    pub detail: String,
}

/// Build a `ValidationErrors` carrying a single message for `field`.
pub(crate) fn single_error(
    field: &'static str,
    code: &'static str,
    message: &'static str,
) -> validator::ValidationErrors {
    let mut error = validator::ValidationError::new(code);
    error.message = Some(message.into());
    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);
    errors
}

/// True when the optional string is present and non-empty.
pub(crate) fn is_filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}
