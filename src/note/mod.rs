//! SOAP note generation
//!
//! Request/response types, the model-output repair rules, and the
//! [`NoteGenerator`] pipeline that ties them to an [`LlmProvider`].
//!
//! [`LlmProvider`]: crate::llm::LlmProvider

mod generator;
mod repair;
mod types;

pub use generator::{panic_message, NoteGenerator};
pub use repair::repair_output;
pub use types::{
    MedicalTerms, NoteResponse, SoapNote, TranscriptRequest, NO_TRANSCRIPT,
    TRANSCRIPT_UNAVAILABLE,
};
