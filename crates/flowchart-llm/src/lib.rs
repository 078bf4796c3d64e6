pub mod groq;
pub mod provider;
pub mod types;

pub use groq::GroqClient;
pub use provider::{CompletionClient, CompletionError, Result};
pub use types::{ChatMessage, PromptPayload, Role};
