use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Sent as the bearer token when `OPENAI_API_KEY` is unset, so every completion
/// call fails loudly with a 401 instead of silently using a stale key.
pub const MISSING_API_KEY_PLACEHOLDER: &str = "sk-unset-openai-api-key";

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo-instruct";

/// Application configuration loaded from environment variables.
/// Immutable after startup; handed to constructors, never read globally.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub openai: OpenAiConfig,
}

/// Settings for the text-completion service used by the answer evaluator.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl OpenAiConfig {
    pub fn uses_placeholder_key(&self) -> bool {
        self.api_key == MISSING_API_KEY_PLACEHOLDER
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .unwrap_or_else(|| MISSING_API_KEY_PLACEHOLDER.to_string());

        let max_tokens: u32 = parse_env("OPENAI_MAX_TOKENS", 200)?;
        if max_tokens == 0 {
            bail!("OPENAI_MAX_TOKENS must be greater than zero");
        }

        let temperature: f32 = parse_env("OPENAI_TEMPERATURE", 0.65)?;
        if !(0.0..=2.0).contains(&temperature) {
            bail!("OPENAI_TEMPERATURE must be between 0.0 and 2.0, got {temperature}");
        }

        let timeout_secs: u64 = parse_env("OPENAI_TIMEOUT_SECS", 30)?;
        if timeout_secs == 0 {
            bail!("OPENAI_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            port: parse_env("PORT", 8000)?,
            rust_log: env_or("RUST_LOG", "info"),
            openai: OpenAiConfig {
                api_key,
                base_url: env_or("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL)
                    .trim_end_matches('/')
                    .to_string(),
                model: env_or("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
                max_tokens,
                temperature,
                timeout_secs,
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}
