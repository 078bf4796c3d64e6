use crate::types::PromptPayload;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Completion contained no message content")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, CompletionError>;

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one prompt to the completion endpoint
    ///
    /// # Arguments
    /// * `payload` - The fully built prompt
    ///
    /// Returns the raw text of the first choice, untouched.
    async fn complete(&self, payload: &PromptPayload) -> Result<String>;

    /// Model identifier used for requests, for logging
    fn model(&self) -> &str;
}
