use std::any::Any;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use tracing::error;

use super::state::AppState;
use crate::note::{panic_message, NoteResponse};
use crate::SoapError;

/// ANY /*
/// OPTIONS answers the CORS preflight; every other method generates a note.
pub async fn dispatch(
    method: Method,
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    if method == Method::OPTIONS {
        return preflight().await.into_response();
    }

    generate_note(state, body).await.into_response()
}

/// OPTIONS /*
/// CORS preflight; headers are added by the router layers
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// POST /*
/// Generate a SOAP note from `{ transcript, patientName? }`. Always 200.
pub async fn generate_note(
    state: AppState,
    body: Result<Bytes, BytesRejection>,
) -> Json<NoteResponse> {
    let response = match body {
        Ok(body) => state.generator.generate_from_body(&body).await,
        Err(rejection) => {
            error!("Failed to read request body: {}", rejection);
            NoteResponse::degraded("", SoapError::Other(rejection.body_text()))
        }
    };

    Json(response)
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Degraded 200 response for a panic outside the note pipeline (before the
/// body is parsed); the pipeline catches its own panics with the transcript
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic_message(panic.as_ref());

    error!("Request handler panicked: {}", detail);

    let body = NoteResponse::degraded("", SoapError::Other(format!("Internal error: {detail}")));
    (StatusCode::OK, Json(body)).into_response()
}
