//! Core rendering abstractions for folio PDF generation.
//!
//! This crate provides the narrow surface every rendering backend exposes:
//! - `PdfEngine` trait for construction, document metadata and rendering to bytes
//! - `EngineOptions` and its page geometry types
//! - Error types for rendering operations

mod error;
mod options;
mod traits;

pub use error::RenderError;
pub use options::{EngineOptions, Orientation, PageSize, Unit};
pub use traits::PdfEngine;
