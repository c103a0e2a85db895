// src/error.rs
use folio_render_core::RenderError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of a single output dispatch. None of them are retried, and the
/// document stays usable after any of them.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Filename not set")]
    NameNotSet,

    #[error("Directory '{}' was not created", .0.display())]
    DirectoryNotCreated(PathBuf),

    #[error("Invalid output destination")]
    InvalidDestination,

    #[error("Filename '{0}' is not a plain file name")]
    InvalidName(String),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to build response: {0}")]
    Response(#[from] http::Error),
}

/// A comprehensive error type for creating, generating and emitting documents.
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("View '{0}' not found")]
    ViewNotFound(String),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Output failed: {0}")]
    Output(#[from] OutputError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
