use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::{Settings, API_KEY_ENV};
use crate::llm::client::LlmProvider;
use crate::{Result, SoapError};

const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";

/// Reply used when the model returned no text part at all.
const EMPTY_REPLY: &str = "{}";

pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.llm.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(SoapError::MissingConfiguration(format!(
                "Gemini API key not set. Set llm.api_key in config or {}.",
                API_KEY_ENV
            )));
        }

        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_GEMINI_MODEL.to_string()
        } else {
            settings.llm.model.trim().to_string()
        };

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_GEMINI_ENDPOINT.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        let mut http = Client::builder();
        if let Some(timeout) = request_timeout(settings) {
            http = http.timeout(timeout);
        }

        Ok(Self {
            http: http.build()?,
            api_key,
            model,
            endpoint,
        })
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }
}

#[async_trait]
impl LlmProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GeminiGenerateContentRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self.http.post(self.request_url()).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let payload = response.text().await.unwrap_or_else(|e| {
                debug!("Failed to read Gemini error body: {}", e);
                String::new()
            });
            error!("Gemini API error ({}): {}", status, payload);
            return Err(SoapError::Upstream(compact_payload(&payload)));
        }

        let payload: GeminiGenerateContentResponse = response.json().await?;
        let reply = extract_reply_text(&payload);
        debug!("Gemini reply: {}", reply);

        Ok(reply)
    }
}

/// Per-call timeout; `timeout_secs = 0` disables it.
fn request_timeout(settings: &Settings) -> Option<Duration> {
    match settings.llm.timeout_secs {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    }
}

/// First candidate's first text part, trimmed; `{}` when that path is missing or blank.
fn extract_reply_text(payload: &GeminiGenerateContentResponse) -> String {
    payload
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .and_then(|c| c.parts.first())
        .and_then(|p| p.text.as_deref())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(EMPTY_REPLY)
        .to_string()
}

/// Re-serialize JSON error bodies onto one line; pass anything else through.
fn compact_payload(payload: &str) -> String {
    serde_json::from_str::<serde_json::Value>(payload)
        .map(|v| v.to_string())
        .unwrap_or_else(|_| payload.trim().to_string())
}

#[derive(Debug, Serialize)]
struct GeminiGenerateContentRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiGenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContentResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}
