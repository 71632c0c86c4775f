use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use super::{is_filled, single_error};

pub const MESSAGE_CONTENT_REQUIRED: &str = "Message content is required";

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChatMessage {
    #[schema(example = "user")]
    pub role: Option<String>,
    #[schema(example = "Plan a portfolio site with three pages")]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ChatRequest {
    pub message: Option<ChatMessage>,
    /// Prior turns. Accepted for API compatibility; not used to build the reply.
    /// Missing and `null` are both treated as no history.
    #[serde(default)]
    #[schema(value_type = Option<Vec<Object>>)]
    pub history: Option<Vec<serde_json::Value>>,
}

impl ChatRequest {
    /// The message content. Only meaningful after `validate` has succeeded.
    pub fn content(&self) -> &str {
        self.message
            .as_ref()
            .and_then(|m| m.content.as_deref())
            .unwrap_or_default()
    }

    pub fn history_len(&self) -> usize {
        self.history.as_ref().map_or(0, Vec::len)
    }
}

impl Validate for ChatRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let has_content = self
            .message
            .as_ref()
            .is_some_and(|m| is_filled(&m.content));

        if has_content {
            Ok(())
        } else {
            Err(single_error("message", "required", MESSAGE_CONTENT_REQUIRED))
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatReply {
    #[schema(example = "assistant")]
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    #[schema(example = "success")]
    pub status: String,
    pub message: ChatReply,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ChatRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_content_is_required() {
        assert!(parse("{}").validate().is_err());
        assert!(parse(r#"{"message":null}"#).validate().is_err());
        assert!(parse(r#"{"message":{"role":"user"}}"#).validate().is_err());
        assert!(parse(r#"{"message":{"role":"user","content":""}}"#)
            .validate()
            .is_err());
    }

    #[test]
    fn test_history_is_accepted_in_any_shape() {
        let request = parse(
            r#"{"message":{"role":"user","content":"hi"},"history":[{"role":"assistant","content":"yo"},42]}"#,
        );
        assert!(request.validate().is_ok());
        assert_eq!(request.content(), "hi");
        assert_eq!(request.history_len(), 2);
    }

    #[test]
    fn test_null_history_is_no_history() {
        let request = parse(r#"{"message":{"content":"hi"},"history":null}"#);
        assert!(request.validate().is_ok());
        assert_eq!(request.history_len(), 0);
    }
}
