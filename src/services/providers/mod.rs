//! Chat-completion provider abstraction
//!
//! The recommendation fetcher only needs "send this prompt, give me the
//! first answer back". Providers own the wire format, authentication and
//! timeout, and classify their failures through [`AppError`] so the caller
//! can tell an unreachable service from a reply it cannot read.
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub mod openrouter;

pub use openrouter::OpenRouterProvider;

/// Trait for chat-completion providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends a single-message conversation and returns the first choice's content
    ///
    /// Transport problems (connection, timeout, non-2xx status) must be
    /// reported as errors for which [`AppError::is_transport`] holds.
    /// A body without the expected shape is [`AppError::MalformedResponse`].
    async fn complete(&self, prompt: &str) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

// ============================================================================
// OpenAI-compatible wire types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

impl<'a> ChatRequest<'a> {
    /// A conversation consisting of one user message
    pub fn single_user_message(model: &'a str, content: &'a str) -> Self {
        Self {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content,
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponseMessage {
    pub content: String,
}

/// Extracts the first choice's content from a raw response body
pub fn first_choice_content(body: &str) -> AppResult<String> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| AppError::MalformedResponse(format!("unexpected response body: {}", e)))?;

    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| AppError::MalformedResponse("response contained no choices".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let request = ChatRequest::single_user_message("some/model:free", "推荐一部电影");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "some/model:free",
                "messages": [{ "role": "user", "content": "推荐一部电影" }]
            })
        );
    }

    #[test]
    fn test_first_choice_content() {
        let body = json!({
            "id": "gen-1",
            "choices": [
                { "message": { "role": "assistant", "content": "电影:A|推荐理由:B" } },
                { "message": { "role": "assistant", "content": "ignored" } }
            ]
        })
        .to_string();

        assert_eq!(first_choice_content(&body).unwrap(), "电影:A|推荐理由:B");
    }

    #[test]
    fn test_empty_choices_is_malformed() {
        let result = first_choice_content(r#"{"choices": []}"#);
        assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let body = r#"{"error": {"message": "rate limited", "code": 429}}"#;
        assert!(matches!(
            first_choice_content(body),
            Err(AppError::MalformedResponse(_))
        ));
        assert!(matches!(
            first_choice_content("not json"),
            Err(AppError::MalformedResponse(_))
        ));
    }
}
