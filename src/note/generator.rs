//! The note generation pipeline
//!
//! receive → validate → short-circuit on blank input → prompt → model call
//! → repair → respond. Every failure ends in a degraded [`NoteResponse`]
//! instead of an error, so callers always get something to render.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{debug, error, info, info_span, warn, Instrument};

use crate::config::Settings;
use crate::llm::{build_provider, build_soap_prompt, LlmProvider};
use crate::note::repair::repair_output;
use crate::note::types::{NoteResponse, TranscriptRequest};
use crate::{Result, SoapError};

/// Stateless note generator; safe to share across concurrent requests.
pub struct NoteGenerator {
    /// The configured model, or why there is none
    provider: std::result::Result<Arc<dyn LlmProvider>, String>,
}

impl NoteGenerator {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider: Ok(provider),
        }
    }

    /// A generator that fails every non-empty request with a configuration error.
    pub fn unconfigured(reason: impl Into<String>) -> Self {
        Self {
            provider: Err(reason.into()),
        }
    }

    /// Build from settings. A missing API key does not fail here; it is
    /// reported per request through the degraded response.
    pub fn from_settings(settings: &Settings) -> Self {
        match build_provider(settings) {
            Ok(provider) => Self::new(provider),
            Err(e) => {
                warn!("LLM provider unavailable: {}", e);
                match e {
                    SoapError::MissingConfiguration(reason) => Self::unconfigured(reason),
                    other => Self::unconfigured(other.to_string()),
                }
            }
        }
    }

    /// Handle a raw request body.
    pub async fn generate_from_body(&self, body: &[u8]) -> NoteResponse {
        match TranscriptRequest::from_slice(body) {
            Ok(request) => self.generate(&request).await,
            Err(e) => {
                error!("SOAP generation error: {}", e);
                NoteResponse::degraded("", e)
            }
        }
    }

    /// Generate a note for a parsed request.
    pub async fn generate(&self, request: &TranscriptRequest) -> NoteResponse {
        let request_id = uuid::Uuid::new_v4();
        let transcript = request.transcript();

        async move {
            info!("Transcript received ({} chars)", transcript.chars().count());
            debug!("Transcript: {}", transcript);

            match AssertUnwindSafe(self.try_generate(transcript))
                .catch_unwind()
                .await
            {
                Ok(Ok(response)) => response,
                Ok(Err(e)) => {
                    error!("SOAP generation error: {}", e);
                    NoteResponse::degraded(transcript, e)
                }
                Err(panic) => {
                    let detail = panic_message(panic.as_ref());
                    error!("SOAP generation panicked: {}", detail);
                    NoteResponse::degraded(
                        transcript,
                        SoapError::Other(format!("Internal error: {detail}")),
                    )
                }
            }
        }
        .instrument(info_span!("note", %request_id))
        .await
    }

    async fn try_generate(&self, transcript: &str) -> Result<NoteResponse> {
        if transcript.trim().is_empty() {
            info!("Empty transcript, skipping model call");
            return Ok(NoteResponse::empty_transcript());
        }

        let provider = self.provider()?;
        let prompt = build_soap_prompt(transcript);
        let raw = provider.generate(&prompt).await?;

        Ok(repair_output(&raw, transcript))
    }

    fn provider(&self) -> Result<&Arc<dyn LlmProvider>> {
        self.provider
            .as_ref()
            .map_err(|reason| SoapError::MissingConfiguration(reason.clone()))
    }
}

/// Text of a caught panic payload.
pub fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic".to_string()
    }
}
