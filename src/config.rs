//! Configuration loading and management for groknews.
//!
//! Loads settings from `groknews.toml` with environment variable overrides for the API keys.
//! A missing file is not an error: every setting has a built-in default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the newsdata.io key
pub const NEWS_KEY_VAR: &str = "NEWSDATA_API_KEY";
/// Environment variable holding the chat-completion key
pub const LLM_KEY_VAR: &str = "GROQ_API_KEY";

const CONFIG_FILE: &str = "groknews.toml";
const REDACTED: &str = "<redacted>";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("failed to render config: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("missing API key(s): {}. Set them in the environment or a .env file", .0.join(", "))]
    MissingApiKey(Vec<String>),
}

/// News search endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NewsConfig {
    pub endpoint: String,
    /// Language filter passed as the `language` query parameter
    pub language: String,
    pub timeout_secs: u64,
}

/// Chat-completion endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LlmConfig {
    pub endpoint: String,
    /// Model identifier (e.g., "llama3-8b-8192")
    pub model: String,
    /// Opening line of every prompt
    pub persona: String,
    pub timeout_secs: u64,
}

/// API keys. The environment always wins over the file.
#[derive(Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub news_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_key: Option<String>,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("news_key", &self.news_key.as_deref().map(|_| REDACTED))
            .field("llm_key", &self.llm_key.as_deref().map(|_| REDACTED))
            .finish()
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub news: NewsConfig,
    pub llm: LlmConfig,
    pub api: ApiConfig,
}

/// Both secrets, present and non-blank.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub news_key: String,
    pub llm_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("news_key", &REDACTED)
            .field("llm_key", &REDACTED)
            .finish()
    }
}

impl Config {
    /// Load configuration from `path`, or from the first default location that exists,
    /// then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(p) => Self::load_from(p)?,
            None => match Self::find_config_file() {
                Some(p) => Self::load_from(&p)?,
                None => Self::default(),
            },
        };

        Ok(config.with_env_overrides(|name| std::env::var(name).ok()))
    }

    /// Load configuration from a specific path, without environment overrides
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Override API keys with values from `lookup` (normally `std::env::var`).
    /// Blank values are ignored.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(NEWS_KEY_VAR).filter(|k| !k.trim().is_empty()) {
            self.api.news_key = Some(key);
        }
        if let Some(key) = lookup(LLM_KEY_VAR).filter(|k| !k.trim().is_empty()) {
            self.api.llm_key = Some(key);
        }
        self
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let local_config = PathBuf::from(CONFIG_FILE);
        if local_config.exists() {
            return Some(local_config);
        }

        let home_config = dirs::home_dir()?
            .join(".config")
            .join("groknews")
            .join(CONFIG_FILE);
        home_config.exists().then_some(home_config)
    }

    /// Both API keys, or the names of the variables that are missing
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let news_key = non_blank(&self.api.news_key);
        let llm_key = non_blank(&self.api.llm_key);

        match (news_key, llm_key) {
            (Some(news_key), Some(llm_key)) => Ok(Credentials {
                news_key: news_key.to_string(),
                llm_key: llm_key.to_string(),
            }),
            (news_key, llm_key) => {
                let mut missing = Vec::new();
                if news_key.is_none() {
                    missing.push(NEWS_KEY_VAR.to_string());
                }
                if llm_key.is_none() {
                    missing.push(LLM_KEY_VAR.to_string());
                }
                Err(ConfigError::MissingApiKey(missing))
            }
        }
    }

    /// Render the effective configuration as TOML with the keys masked
    pub fn to_redacted_toml(&self) -> Result<String, ConfigError> {
        let mut shown = self.clone();
        shown.api.news_key = shown.api.news_key.map(|_| REDACTED.to_string());
        shown.api.llm_key = shown.api.llm_key.map(|_| REDACTED.to_string());
        Ok(toml::to_string_pretty(&shown)?)
    }
}

impl NewsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl LlmConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://newsdata.io/api/1/news".to_string(),
            language: "en".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            model: "llama3-8b-8192".to_string(),
            persona: "You are Grok, an AI with sharp wit, sarcasm, and intelligence.".to_string(),
            timeout_secs: 30,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
