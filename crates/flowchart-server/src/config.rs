//! Command-line and environment configuration.
//!
//! Every flag has an environment fallback. `main` loads a `.env` file before
//! parsing, so values may also come from there.

use std::time::Duration;

use clap::Parser;
use flowchart_llm::groq::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use thiserror::Error;

pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Parser, Debug, Clone)]
#[command(name = "flowchart-server")]
#[command(about = "Flowchart Generator HTTP Server")]
#[command(version)]
pub struct Cli {
    /// Enable debug mode
    #[arg(long, env = "DEBUG", default_value = "false")]
    pub debug: bool,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Server port
    #[arg(long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// Groq API key
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// LLM API base URL
    #[arg(long, env = "LLM_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub llm_base_url: String,

    /// LLM model name
    #[arg(long, env = "LLM_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Sampling temperature
    #[arg(long, env = "LLM_TEMPERATURE", default_value = "0.5")]
    pub temperature: f32,

    /// Timeout for the completion call, in seconds
    #[arg(long, env = "LLM_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Origin allowed by CORS
    #[arg(long, env = "CORS_ORIGIN", default_value = DEFAULT_CORS_ORIGIN)]
    pub cors_origin: String,

    /// Log level (overrides debug flag)
    #[arg(long, env = "RUST_LOG")]
    pub log_level: Option<String>,

    /// Generate a single flowchart for TEXT, print it and exit
    #[arg(long, value_name = "TEXT")]
    pub once: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GROQ_API_KEY is missing")]
    MissingApiKey,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    pub llm: LlmConfig,
}

impl Cli {
    /// Validate into a [`ServerConfig`]. A blank API key counts as missing.
    pub fn into_config(self) -> Result<ServerConfig, ConfigError> {
        let api_key = self
            .api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(ServerConfig {
            host: self.host,
            port: self.port,
            cors_origin: self.cors_origin,
            llm: LlmConfig {
                api_key,
                base_url: self.llm_base_url,
                model: self.model,
                temperature: self.temperature,
                timeout: self.timeout_secs.map(Duration::from_secs),
            },
        })
    }
}
