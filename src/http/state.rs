use std::sync::Arc;

use crate::config::Settings;
use crate::note::NoteGenerator;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Note pipeline; immutable, shared by every request
    pub generator: Arc<NoteGenerator>,
}

impl AppState {
    pub fn new(generator: NoteGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(NoteGenerator::from_settings(settings))
    }
}
