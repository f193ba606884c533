/// LLM Client — the single point of entry for chat-completion calls.
///
/// ARCHITECTURAL RULE: handlers never talk to the provider directly. They go
/// through the `ChatCompletion` trait held in `AppState`, which production
/// fills with `GroqClient` and tests fill with a fake.
///
/// One attempt per call: no retry, no explicit timeout.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

pub mod prompts;

/// Nucleus sampling is pinned; only temperature and max tokens are configurable.
const TOP_P: f32 = 1.0;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("GROQ_API_KEY is not set")]
    MissingApiKey,

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Turns one prompt into one completion text.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Model identifier, reported by the health endpoint.
    fn model(&self) -> &str;
}

/// Generation parameters passed through to the provider unmodified.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl From<&Config> for SamplingSettings {
    fn from(config: &Config) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    stop: Option<&'a str>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if the provider sent one.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// Client for Groq's OpenAI-compatible chat-completions endpoint.
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    api_key: Option<String>,
    api_url: String,
    settings: SamplingSettings,
}

impl GroqClient {
    pub fn new(api_key: Option<String>, api_url: String, settings: SamplingSettings) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_url,
            settings,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.groq_api_key.clone(),
            config.groq_api_url.clone(),
            SamplingSettings::from(config),
        )
    }

    /// Makes a raw call to the provider, returning the full response object.
    pub async fn call(&self, prompt: &str) -> Result<ChatCompletionResponse, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = ChatCompletionRequest {
            messages: vec![ChatMessage {
                role: "system",
                content: prompt,
            }],
            model: &self.settings.model,
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
            top_p: TOP_P,
            stop: None,
            stream: false,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ProviderError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let completion: ChatCompletionResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(completion)
    }
}

#[async_trait]
impl ChatCompletion for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt).await?;
        response
            .first_content()
            .map(str::to_owned)
            .ok_or(LlmError::EmptyContent)
    }

    fn model(&self) -> &str {
        &self.settings.model
    }
}
