use std::time::Duration;

use log::debug;
use serde_json::Value;

use crate::config::Config;
use crate::error::SummaryError;
use crate::{SUMMARY_INPUT_MAX_CHARS, bound_text};

const DEFAULT_BASE_URL: &str = "https://openrouter.ai";

const SYSTEM_PROMPT: &str =
    "You are a helpful AI assistant. Summarize the following transcript and extract core points.";

pub const DEFAULT_MODEL: &str = "openai/gpt-5";

/// Deadline for the chat-completion request
const SUMMARY_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends transcript text to an OpenRouter chat-completion endpoint.
///
/// Built from an explicit [`Config`]; the credential is never read from the
/// environment here, so the requester stays testable without process
/// mutation.
pub struct Summarizer {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl Summarizer {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the requester at another host (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Summarize transcript text.
    ///
    /// Fails with [`SummaryError::EmptyTranscript`] on blank input and
    /// [`SummaryError::MissingApiKey`] when no credential is configured. A
    /// response without a usable completion is
    /// [`SummaryError::UnexpectedShape`], distinct from network failures.
    pub async fn summarize(&self, transcript: &str) -> Result<String, SummaryError> {
        if transcript.trim().is_empty() {
            return Err(SummaryError::EmptyTranscript);
        }
        let Some(api_key) = &self.api_key else {
            return Err(SummaryError::MissingApiKey);
        };

        let bounded = bound_text(transcript, SUMMARY_INPUT_MAX_CHARS);
        debug!("Summarizing {} chars with model {}", bounded.chars().count(), self.model);

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": bounded }
            ]
        });

        let resp = self
            .client
            .post(format!("{}/api/v1/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .header("Content-Type", "application/json")
            .timeout(SUMMARY_TIMEOUT)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(SummaryError::Request(format!("provider returned {status}: {body}")));
        }

        // A successful response whose body does not decode as JSON is the
        // same contract violation as a missing completion, not a transport
        // failure
        let text = resp.text().await?;
        let json: Value = serde_json::from_str(&text).map_err(|_| SummaryError::UnexpectedShape)?;
        extract_summary(&json)
    }
}

fn extract_summary(json: &Value) -> Result<String, SummaryError> {
    json.get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(SummaryError::UnexpectedShape)
}
