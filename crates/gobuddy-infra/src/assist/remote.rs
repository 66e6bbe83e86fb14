//! HTTP client for the text-rewrite backend.
//!
//! One POST per request, JSON in and out. Policy (timeouts at the
//! service level, fallback text) lives in `gobuddy_core::assist`; this
//! adapter only reports what happened.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use gobuddy_core::ports::{AssistError, ContentAssist};

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 8;
const MAX_OUTPUT_TOKENS: u32 = 300;
const TEMPERATURE: f32 = 0.7;

/// Remote assist configuration.
#[derive(Debug, Clone)]
pub struct RemoteAssistConfig {
    /// Rewrite endpoint URL.
    pub endpoint: String,
    /// Bearer token, if the backend wants one.
    pub api_key: Option<String>,
    pub model: String,
    /// Per-request timeout, applied at the HTTP client.
    pub timeout: Duration,
}

impl RemoteAssistConfig {
    /// Load from environment variables. Returns `None` when
    /// `ASSIST_ENDPOINT` is unset, which means the app runs with the
    /// local rewrite only.
    pub fn from_env() -> Option<Self> {
        let endpoint = std::env::var("ASSIST_ENDPOINT").ok()?;
        Some(Self {
            endpoint,
            api_key: std::env::var("ASSIST_API_KEY").ok(),
            model: std::env::var("ASSIST_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            timeout: Duration::from_secs(
                std::env::var("ASSIST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RewriteRequest<'a> {
    model: &'a str,
    prompt: String,
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct RewriteResponse {
    text: String,
}

/// Reqwest-based [`ContentAssist`] implementation.
pub struct RemoteContentAssist {
    client: reqwest::Client,
    config: RemoteAssistConfig,
}

impl RemoteContentAssist {
    pub fn new(config: RemoteAssistConfig) -> Result<Self, AssistError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AssistError::Request(e.to_string()))?;

        tracing::info!(endpoint = %config.endpoint, model = %config.model, "Remote content assist enabled");
        Ok(Self { client, config })
    }
}

fn build_prompt(text: &str) -> String {
    format!(
        "You are an enthusiastic sports community manager. Rewrite the following user post \
         to be more engaging, friendly, and clear for a sports partner finder app called \"GoBuddy\".\n\
         \n\
         Rules:\n\
         1. Keep it concise (under 280 chars).\n\
         2. Include relevant sports emojis.\n\
         3. Make it sound inviting.\n\
         4. Do not include hashtags.\n\
         \n\
         Original Post: \"{text}\""
    )
}

#[async_trait]
impl ContentAssist for RemoteContentAssist {
    async fn enhance(&self, text: &str) -> Result<String, AssistError> {
        let body = RewriteRequest {
            model: &self.config.model,
            prompt: build_prompt(text),
            max_output_tokens: MAX_OUTPUT_TOKENS,
            temperature: TEMPERATURE,
        };

        let mut request = self.client.post(&self.config.endpoint).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AssistError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssistError::Backend(format!("status {status}")));
        }

        let reply: RewriteResponse = response
            .json()
            .await
            .map_err(|e| AssistError::Malformed(e.to_string()))?;

        let rewritten = reply.text.trim().to_string();
        if rewritten.is_empty() {
            return Err(AssistError::Empty);
        }
        Ok(rewritten)
    }
}
