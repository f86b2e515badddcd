//! OpenRouter chat-completion provider
//!
//! Speaks the OpenAI-compatible `/chat/completions` protocol with a bearer
//! key. One request per call, no retries; the client-wide timeout bounds
//! the whole exchange.
use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, Client as HttpClient};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    services::providers::{first_choice_content, ChatRequest, CompletionProvider},
};

#[derive(Clone)]
pub struct OpenRouterProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
    timeout: Duration,
}

impl OpenRouterProvider {
    pub fn new(api_key: String, api_url: String, model: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
            model,
            timeout,
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.openrouter_api_key.clone(),
            config.openrouter_api_url.clone(),
            config.openrouter_model.clone(),
            config.request_timeout(),
        )
    }

    fn classify(&self, e: reqwest::Error) -> AppError {
        if e.is_timeout() {
            AppError::Timeout(format!("no response within {:?}", self.timeout))
        } else {
            AppError::HttpClient(e)
        }
    }
}

#[async_trait::async_trait]
impl CompletionProvider for OpenRouterProvider {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let request = ChatRequest::single_user_message(&self.model, prompt);

        let response = self
            .http_client
            .post(&self.api_url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        tracing::debug!(
            status = %status,
            body = %body,
            provider = self.name(),
            "Completion response received"
        );

        if !status.is_success() {
            return Err(AppError::ExternalApi(format!(
                "API returned status {}: {}",
                status, body
            )));
        }

        first_choice_content(&body)
    }

    fn name(&self) -> &'static str {
        "openrouter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let vars = vec![
            ("OPENROUTER_API_KEY".to_string(), "sk-test".to_string()),
            ("REQUEST_TIMEOUT_SECS".to_string(), "3".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        let provider = OpenRouterProvider::from_config(&config).unwrap();
        assert_eq!(provider.api_key, "sk-test");
        assert_eq!(provider.model, "meta-llama/llama-3.3-70b-instruct:free");
        assert_eq!(provider.timeout, Duration::from_secs(3));
        assert_eq!(provider.name(), "openrouter");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Port 9 (discard) on localhost is not expected to be listening
        let provider = OpenRouterProvider::new(
            "sk-test".to_string(),
            "http://127.0.0.1:9/api/v1/chat/completions".to_string(),
            "m".to_string(),
            Duration::from_secs(2),
        )
        .unwrap();

        let err = provider.complete("hi").await.unwrap_err();
        assert!(err.is_transport(), "unexpected error: {:?}", err);
    }
}
