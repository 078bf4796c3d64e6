//! Groq chat-completion client.
//!
//! Groq exposes an OpenAI-compatible `chat/completions` endpoint. Requests are
//! sent non-streaming and only the first choice's content is returned.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::provider::{CompletionClient, CompletionError, Result};
use crate::types::{ChatMessage, PromptPayload};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.1-70b-versatile";
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

pub struct GroqClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    timeout: Option<Duration>,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl GroqClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Per-request timeout. Without one the transport default applies.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn build_request_body<'a>(&'a self, payload: &'a PromptPayload) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.model,
            messages: payload.messages(),
            temperature: self.temperature,
            stream: false,
        }
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, payload: &PromptPayload) -> Result<String> {
        let body = self.build_request_body(payload);

        log::debug!(
            "Sending {} message(s) to {} (model: {})",
            payload.messages().len(),
            self.endpoint(),
            self.model
        );

        let mut request = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body);

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await?;
            return Err(CompletionError::Api(format!("HTTP {}: {}", status, text)));
        }

        let text = response.text().await?;
        let completion: ChatCompletionResponse = serde_json::from_str(&text)?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyResponse)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
