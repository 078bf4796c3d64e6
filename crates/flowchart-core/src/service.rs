use std::sync::Arc;

use flowchart_llm::{CompletionClient, CompletionError};
use thiserror::Error;

use crate::history::{Exchange, SessionStore};
use crate::prompt::{build_prompt, build_prompt_with_history};
use crate::sanitize::sanitize;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Completion request failed: {0}")]
    Upstream(#[from] CompletionError),
}

/// Prompt → completion → sanitize, with optional per-session transcripts.
pub struct GenerationService {
    client: Arc<dyn CompletionClient>,
    sessions: Arc<SessionStore>,
}

impl GenerationService {
    pub fn new(client: Arc<dyn CompletionClient>, sessions: Arc<SessionStore>) -> Self {
        Self { client, sessions }
    }

    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.sessions
    }

    /// Model identifier of the underlying completion client.
    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Generate Mermaid code for `request`.
    ///
    /// Without a session id the call is stateless. With one, earlier exchanges
    /// of that session are replayed in the prompt and the new exchange is
    /// recorded once the completion succeeds. A failed completion records
    /// nothing.
    pub async fn generate(
        &self,
        request: &str,
        session_id: Option<&str>,
    ) -> Result<String, GenerationError> {
        let payload = match session_id {
            Some(id) => {
                let history = self.sessions.history(id).await;
                log::debug!("[{}] building prompt with {} prior exchange(s)", id, history.len());
                build_prompt_with_history(request, &history)
            }
            None => build_prompt(request),
        };

        log::debug!(
            "Requesting completion from model {} ({} message(s))",
            self.client.model(),
            payload.messages().len()
        );
        let raw = self.client.complete(&payload).await?;
        let diagram = sanitize(&raw);

        if let Some(id) = session_id {
            self.sessions
                .append(id, Exchange::new(request, diagram.clone()))
                .await;
        }

        Ok(diagram)
    }
}
