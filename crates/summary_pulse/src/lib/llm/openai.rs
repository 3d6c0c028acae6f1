use reqwest::Client;
use serde::Deserialize;

use crate::llm::completer::{Completer, ModelConfig};

/// Client for OpenAI-compatible chat completion endpoints (OpenAI, Ollama, LM Studio, vLLM)
#[derive(Debug, Clone, Default)]
pub struct OpenAIClient {
    client: Client,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAIError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("No content in completion response")]
    EmptyResponse,
}

impl OpenAIClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn send_completion_request(
        &self,
        config: &ModelConfig,
        system_prompt: &str,
        user_content: &str,
    ) -> Result<CompletionResponse, OpenAIError> {
        let body = serde_json::json!({
            "model": config.model,
            "messages": [
                {
                    "role": "system",
                    "content": system_prompt
                },
                {
                    "role": "user",
                    "content": user_content
                }
            ]
        });

        let mut request = self
            .client
            .post(format!(
                "{}/chat/completions",
                config.endpoint.trim_end_matches('/')
            ))
            .json(&body);
        if let Some(api_key) = &config.api_key {
            request = request.bearer_auth(api_key);
        }

        let resp = request
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenAIError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: CompletionMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}

impl Completer for OpenAIClient {
    type Error = OpenAIError;

    #[tracing::instrument(skip_all, fields(model = %config.model))]
    async fn complete(
        &self,
        config: &ModelConfig,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, Self::Error> {
        let response = self
            .send_completion_request(config, system_prompt, user_prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to complete prompt"))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(OpenAIError::EmptyResponse)
    }
}
