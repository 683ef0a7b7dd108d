//! Error types for the engine template service.
//!
//! Three kinds of failure reach the HTTP boundary: validation errors (client
//! fault, 422), template generation errors (server fault, 500 with the
//! wrapped cause), and panics (opaque 500, handled in the router's
//! catch-panic layer).

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// A required request field was missing or empty.
#[derive(Error, Debug)]
#[error("field '{field}' is required and must be a non-empty string")]
pub struct ValidationError {
    pub field: &'static str,
}

/// Any failure while allocating scratch space or writing archive entries.
#[derive(Error, Debug)]
pub enum TemplateGenerationError {
    #[error("could not allocate scratch directory: {0}")]
    Scratch(#[source] std::io::Error),

    #[error("could not create archive at {path}: {source}")]
    CreateArchive {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not write archive entry '{entry}': {source}")]
    WriteEntry {
        entry: String,
        source: zip::result::ZipError,
    },

    #[error("could not finalize archive: {0}")]
    Finish(#[source] zip::result::ZipError),

    #[error("could not read generated archive {path}: {source}")]
    ReadArchive {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("archive assembly task failed: {0}")]
    Task(#[source] tokio::task::JoinError),
}

/// Top-level error for HTTP handlers.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to generate game engine template: {0}")]
    TemplateGeneration(#[from] TemplateGenerationError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::TemplateGeneration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("{self}");
        }
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
