use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use stylevision_core::GenerationOutcome;
use stylevision_prompts::{assemble_prompt, DescriptionRequest, SYSTEM_PROMPT};
use tracing::{info, warn};

use super::TextGenerator;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Client for any OpenAI-compatible `/chat/completions` endpoint
/// (Groq by default).
pub struct ChatCompletionsGenerator {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionsGenerator {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        model: &str,
        temperature: f32,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: model.to_string(),
            temperature,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String, String> {
        let body = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let resp = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(describe_transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(describe_status_error(status, &text));
        }

        let parsed: ChatResponse = resp
            .json()
            .await
            .map_err(|e| format!("invalid response from text generator: {e}"))?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| "text generator returned no content".to_string())
    }
}

#[async_trait]
impl TextGenerator for ChatCompletionsGenerator {
    fn name(&self) -> &str {
        "chat-completions"
    }

    fn model_hint(&self) -> Option<&str> {
        Some(&self.model)
    }

    async fn generate(&self, request: &DescriptionRequest) -> GenerationOutcome {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("no API key configured for text generator");
            return GenerationOutcome::Failed("no API key configured".into());
        };

        let prompt = assemble_prompt(request);
        match self.complete(api_key, &prompt).await {
            Ok(text) => {
                info!(model = %self.model, chars = text.len(), "description generated");
                GenerationOutcome::Generated(text)
            }
            Err(reason) => {
                warn!(model = %self.model, "description generation failed: {reason}");
                GenerationOutcome::Failed(reason)
            }
        }
    }
}

fn describe_transport_error(e: reqwest::Error) -> String {
    if e.is_timeout() {
        "request to text generator timed out".to_string()
    } else if e.is_connect() {
        format!("could not connect to text generator: {e}")
    } else {
        e.to_string()
    }
}

fn describe_status_error(status: StatusCode, body: &str) -> String {
    let msg = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.trim().to_string());
    if msg.is_empty() {
        format!("text generator returned {status}")
    } else {
        format!("text generator returned {status}: {msg}")
    }
}
