use std::sync::Arc;
use std::time::Duration;

use clap::{Args, ValueEnum};
use tracing::info;

use crate::backend::chat::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::{ChatCompletionsGenerator, MockGenerator, TextGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorBackend {
    /// OpenAI-compatible chat completions endpoint.
    Chat,
    /// Canned description, no network. For demos and tests.
    Mock,
}

#[derive(Debug, Clone, Args)]
pub struct GeneratorConfig {
    /// Which text generator to use
    #[arg(
        long = "generator",
        env = "STYLEVISION_GENERATOR",
        value_enum,
        default_value = "chat"
    )]
    pub backend: GeneratorBackend,

    /// API key for the text generator
    #[arg(long = "llm-api-key", env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the chat completions API
    #[arg(long = "llm-base-url", env = "STYLEVISION_LLM_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Model name
    #[arg(long = "llm-model", env = "STYLEVISION_LLM_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Sampling temperature
    #[arg(long = "llm-temperature", env = "STYLEVISION_LLM_TEMPERATURE", default_value_t = 0.7)]
    pub temperature: f32,

    /// Request timeout (seconds)
    #[arg(long = "llm-timeout", env = "STYLEVISION_LLM_TIMEOUT", default_value_t = 30)]
    pub timeout_secs: u64,
}

impl GeneratorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Build the configured text generator.
pub fn build_generator(config: &GeneratorConfig) -> anyhow::Result<Arc<dyn TextGenerator>> {
    let generator: Arc<dyn TextGenerator> = match config.backend {
        GeneratorBackend::Chat => Arc::new(ChatCompletionsGenerator::new(
            &config.base_url,
            config.api_key.clone(),
            &config.model,
            config.temperature,
            config.timeout(),
        )?),
        GeneratorBackend::Mock => Arc::new(MockGenerator::success(
            "A thoughtfully made piece, ready for your store.",
        )),
    };
    info!(
        backend = generator.name(),
        model = generator.model_hint().unwrap_or("-"),
        "text generator ready"
    );
    Ok(generator)
}
