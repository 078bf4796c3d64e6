use std::sync::Arc;

use flowchart_core::{GenerationService, SessionStore};
use flowchart_llm::{CompletionClient, GroqClient};

use crate::config::LlmConfig;

pub struct AppState {
    pub generator: GenerationService,
}

impl AppState {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            generator: GenerationService::new(client, Arc::new(SessionStore::new())),
        }
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        log::info!(
            "Creating Groq client with base URL: {} and model: {}",
            config.base_url,
            config.model
        );

        let mut client = GroqClient::new(config.api_key.clone())
            .with_base_url(config.base_url.clone())
            .with_model(config.model.clone())
            .with_temperature(config.temperature);

        if let Some(timeout) = config.timeout {
            client = client.with_timeout(timeout);
        }

        Self::new(Arc::new(client))
    }

    pub fn sessions(&self) -> &Arc<SessionStore> {
        self.generator.sessions()
    }
}
