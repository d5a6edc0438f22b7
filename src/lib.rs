//! soapnote - Turns consultation transcripts into structured SOAP notes
//!
//! The whole service is one pipeline: transcript in, Gemini call, repaired
//! SOAP note out. See [`note::NoteGenerator`] for the entry point.

pub mod cli;
pub mod config;
pub mod http;
pub mod llm;
pub mod note;

use thiserror::Error;

/// Main error type for soapnote
#[derive(Error, Debug)]
pub enum SoapError {
    #[error("Configuration error: {0}")]
    MissingConfiguration(String),

    #[error("Gemini API returned error: {0}")]
    Upstream(String),

    #[error("Invalid request body: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SoapError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "soapnote";
