use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerationClient, GenerationError};

/// Chat-completion client for OpenAI-compatible endpoints. The request-level
/// deadline lives here; the pipeline wraps calls in its own overall deadline.
pub struct OpenAiGenerationClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize, Deserialize, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiGenerationClient {
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        max_tokens: usize,
        temperature: f32,
        request_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(request_timeout).build()?;
        Ok(Self {
            client,
            base_url,
            api_key,
            model,
            max_tokens,
            temperature,
        })
    }
}

#[async_trait]
impl GenerationClient for OpenAiGenerationClient {
    async fn complete(
        &self,
        prompt: &str,
        system_prompt: &str,
    ) -> Result<String, GenerationError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout
                } else {
                    GenerationError::ApiRequestFailed(e.to_string())
                }
            })?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerationError::RateLimited);
        }
        if !response.status().is_success() {
            return Err(GenerationError::ApiRequestFailed(format!(
                "status {}",
                response.status()
            )));
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(content)
    }
}
