use crate::config::Config;
use crate::i18n::Language;
use crate::retry::{with_retry_if, RetryConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResponse {
    ai_response: String,
}

/// Client for the AI analysis endpoint behind the chat screen.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    client: reqwest::Client,
    url: String,
    retry: RetryConfig,
}

impl AnalysisClient {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            retry: RetryConfig::analysis(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.http_client()?, &config.analyze_api_url))
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Send `prompt` for analysis and return the AI's reply.
    ///
    /// Rate limits, server errors and transport failures are retried with
    /// backoff; other 4xx responses fail immediately.
    pub async fn analyze(&self, prompt: &str, language: Option<Language>) -> Result<String> {
        debug!(
            "Requesting analysis for {} chars (language: {:?})",
            prompt.chars().count(),
            language.map(|l| l.code())
        );

        with_retry_if(
            &self.retry,
            "AI analysis",
            || self.analyze_once(prompt, language),
            is_retryable_error,
        )
        .await
    }

    async fn analyze_once(&self, prompt: &str, language: Option<Language>) -> Result<String> {
        let request = AnalyzeRequest {
            prompt,
            language: language.map(|l| l.code()),
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to analysis API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Analysis API error ({}): {}", status, body);
        }

        let parsed: AnalyzeResponse = response
            .json()
            .await
            .context("Failed to parse analysis response")?;

        Ok(parsed.ai_response)
    }
}

/// Status errors carry the code in parentheses: "Analysis API error (503 ...)".
/// Only 429 and 5xx are retried among those; anything else (network errors,
/// timeouts) is treated as transient.
fn is_retryable_error(error: &anyhow::Error) -> bool {
    let message = error.to_string();

    if let Some(rest) = message.strip_prefix("Analysis API error (") {
        let digits = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        if let Ok(status) = rest[..digits].parse::<u16>() {
            return status == 429 || status >= 500;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn client_for(server: &MockServer) -> AnalysisClient {
        AnalysisClient::new(reqwest::Client::new(), format!("{}/api/analyze", server.uri()))
            .with_retry(RetryConfig::new(3, Duration::from_millis(5)))
    }

    // ==================== analyze Tests ====================

    #[tokio::test]
    async fn test_analyze_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .and(body_json(serde_json::json!({
                "prompt": "I feel anxious",
                "language": "en"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "aiResponse": "Let's talk about it."
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client_for(&server)
            .analyze("I feel anxious", Some(Language::ENGLISH))
            .await
            .expect("Should succeed");

        assert_eq!(reply, "Let's talk about it.");
    }

    #[tokio::test]
    async fn test_analyze_omits_missing_language() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .and(body_json(serde_json::json!({ "prompt": "hi" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "aiResponse": "hello" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let reply = client_for(&server).analyze("hi", None).await.unwrap();
        assert_eq!(reply, "hello");
    }

    #[tokio::test]
    async fn test_analyze_retries_server_errors() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "aiResponse": "finally" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let reply = client_for(&server)
            .analyze("hello", Some(Language::PERSIAN))
            .await
            .expect("Should succeed on third attempt");
        assert_eq!(reply, "finally");
    }

    #[tokio::test]
    async fn test_analyze_does_not_retry_bad_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(ResponseTemplate::new(400).set_body_string("missing prompt"))
            .expect(1)
            .mount(&server)
            .await;

        let error = client_for(&server)
            .analyze("", None)
            .await
            .expect_err("Should fail");

        let message = error.to_string();
        assert!(message.contains("400"));
        assert!(message.contains("missing prompt"));
    }

    #[tokio::test]
    async fn test_analyze_gives_up_after_max_attempts() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(ResponseTemplate::new(429))
            .expect(3)
            .mount(&server)
            .await;

        let result = client_for(&server).analyze("hello", None).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_analyze_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "reply": "x" })),
            )
            .mount(&server)
            .await;

        let error = client_for(&server)
            .with_retry(RetryConfig::once())
            .analyze("hello", None)
            .await
            .unwrap_err();
        assert!(error.to_string().contains("Failed to parse analysis response"));
    }

    // ==================== is_retryable_error Tests ====================

    #[test]
    fn test_is_retryable_error_status_codes() {
        let retryable = |s: &str| is_retryable_error(&anyhow::anyhow!("{}", s));

        assert!(retryable("Analysis API error (500 Internal Server Error): x"));
        assert!(retryable("Analysis API error (503 Service Unavailable): x"));
        assert!(retryable("Analysis API error (429 Too Many Requests): x"));
        assert!(!retryable("Analysis API error (400 Bad Request): x"));
        assert!(!retryable("Analysis API error (401 Unauthorized): x"));
        assert!(!retryable("Analysis API error (404 Not Found): x"));
    }

    #[test]
    fn test_is_retryable_error_transport() {
        let error = anyhow::anyhow!("connection refused")
            .context("Failed to send request to analysis API");
        assert!(is_retryable_error(&error));
    }
}
