use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "llama3-8b-8192";
pub const DEFAULT_TEMPERATURE: f32 = 0.5;
pub const DEFAULT_MAX_TOKENS: u32 = 8192;
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Application configuration loaded from environment variables.
/// Only malformed numeric values abort startup; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Groq credential. Absent means every provider call fails with 500.
    pub groq_api_key: Option<String>,
    pub groq_api_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            groq_api_key: var("GROQ_API_KEY"),
            groq_api_url: var("GROQ_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            model: var("MODEL_AI").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: match var("TEMPERATURE_AI") {
                Some(raw) => raw
                    .trim()
                    .parse::<f32>()
                    .with_context(|| format!("TEMPERATURE_AI must be a number, got '{raw}'"))?,
                None => DEFAULT_TEMPERATURE,
            },
            max_tokens: match var("MAX_TOKENS_AI") {
                Some(raw) => raw
                    .trim()
                    .parse::<u32>()
                    .with_context(|| format!("MAX_TOKENS_AI must be an integer, got '{raw}'"))?,
                None => DEFAULT_MAX_TOKENS,
            },
            port: var("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .trim()
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
