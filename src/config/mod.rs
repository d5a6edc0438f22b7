//! Configuration module for soapnote
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::{LlmSettings, ServerSettings, Settings, API_KEY_ENV};
