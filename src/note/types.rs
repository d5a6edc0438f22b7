//! Request and response shapes for note generation

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `subjective` text when the request carried no usable transcript
pub const NO_TRANSCRIPT: &str = "No transcript provided";

/// `subjective` text for failures that happened before a transcript was read
pub const TRANSCRIPT_UNAVAILABLE: &str = "Transcript unavailable";

/// Extracted medical entities, passed through as the model returned them
pub type MedicalTerms = Map<String, Value>;

/// Incoming request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranscriptRequest {
    /// Raw consultation transcript
    #[serde(default)]
    pub transcript: Option<String>,

    /// Patient name (accepted, not used in the note)
    #[serde(default, rename = "patientName")]
    pub patient_name: Option<String>,
}

impl TranscriptRequest {
    /// Create a request for the given transcript
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: Some(transcript.into()),
            patient_name: None,
        }
    }

    /// Parse an untrusted JSON body. Only an object can carry fields; any
    /// other non-null JSON value reads as a request with no transcript.
    pub fn from_slice(body: &[u8]) -> crate::Result<Self> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Object(fields) => Ok(serde_json::from_value(Value::Object(fields))?),
            Value::Null => Err(serde_json::Error::custom("request body is null").into()),
            _ => Ok(Self::default()),
        }
    }

    /// Transcript text, empty when absent
    pub fn transcript(&self) -> &str {
        self.transcript.as_deref().unwrap_or_default()
    }
}

/// A clinical note in SOAP layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoapNote {
    /// Patient-reported history
    pub subjective: String,

    /// Observed findings
    pub objective: String,

    /// Diagnosis
    pub assessment: String,

    /// Treatment plan
    pub plan: String,
}

impl SoapNote {
    /// A note with only the subjective section filled in
    pub fn subjective_only(subjective: impl Into<String>) -> Self {
        Self {
            subjective: subjective.into(),
            ..Self::default()
        }
    }
}

/// Response body returned to the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteResponse {
    pub soap: SoapNote,

    #[serde(rename = "medicalTerms", default)]
    pub medical_terms: MedicalTerms,

    /// Failure message, present only on the degraded path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NoteResponse {
    /// Successful response
    pub fn new(soap: SoapNote, medical_terms: MedicalTerms) -> Self {
        Self {
            soap,
            medical_terms,
            error: None,
        }
    }

    /// Response for an empty or whitespace-only transcript
    pub fn empty_transcript() -> Self {
        Self::new(SoapNote::subjective_only(NO_TRANSCRIPT), MedicalTerms::new())
    }

    /// Response for a failed generation; keeps the transcript when there is one
    pub fn degraded(transcript: &str, error: impl ToString) -> Self {
        let subjective = if transcript.is_empty() {
            TRANSCRIPT_UNAVAILABLE
        } else {
            transcript
        };

        Self {
            soap: SoapNote::subjective_only(subjective),
            medical_terms: MedicalTerms::new(),
            error: Some(error.to_string()),
        }
    }
}
