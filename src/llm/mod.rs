//! LLM module for soapnote
//!
//! Wraps the Gemini generateContent API behind the [`LlmProvider`] trait.

mod client;
mod gemini;
mod prompts;

pub use client::{build_provider, LlmProvider};
pub use gemini::GeminiClient;
pub use prompts::build_soap_prompt;
