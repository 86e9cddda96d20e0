use crate::i18n::Language;
use anyhow::{Context, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Remote endpoints
    pub translate_api_url: String,
    pub analyze_api_url: String,

    // Storage
    pub store_path: String,

    // Behavior
    pub default_language: Language,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let default_language = match var("DEFAULT_LANGUAGE") {
            Some(code) => Language::from_code(code.trim())
                .with_context(|| format!("DEFAULT_LANGUAGE is invalid: {:?}", code))?,
            None => Language::canonical(),
        };

        let request_timeout_secs = match var("REQUEST_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse()
                .with_context(|| format!("REQUEST_TIMEOUT_SECS is not a number: {:?}", value))?,
            None => 15,
        };

        Ok(Self {
            translate_api_url: var("TRANSLATE_API_URL")
                .unwrap_or_else(|| "http://localhost:3000/api/translate".to_string()),
            analyze_api_url: var("ANALYZE_API_URL")
                .unwrap_or_else(|| "http://localhost:3000/api/analyze".to_string()),

            store_path: var("STORE_PATH").unwrap_or_else(|| "data/store.json".to_string()),

            default_language,
            request_timeout_secs,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Shared HTTP client for both endpoints.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.request_timeout())
            .build()
            .context("Failed to build HTTP client")
    }
}
