pub mod history;
pub mod prompt;
pub mod sanitize;
pub mod service;

pub use history::{Exchange, SessionStore};
pub use prompt::{build_prompt, build_prompt_with_history, MERMAID_PROMPT_TEMPLATE};
pub use sanitize::sanitize;
pub use service::{GenerationError, GenerationService};
