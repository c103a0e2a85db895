//! Immutable PDF documents and their output.
//!
//! A [`Document`] wraps one rendering engine together with its metadata.
//! [`OutputDispatcher`] turns a document into bytes, a file on disk, or an
//! HTTP download/inline response according to a destination code:
//!
//! | Code | Meaning |
//! |---|---|
//! | `D` | download (attachment response) |
//! | `F` | also write to `path/name`, combinable with one other code |
//! | `I` | inline response |
//! | `S` | the rendered bytes |

pub mod config;
pub mod destination;
pub mod document;
pub mod error;
pub mod factory;
pub mod generator;
pub mod output;
pub mod pdf;
pub mod response;
#[cfg(feature = "axum")]
mod web;

pub use config::{DocumentConfig, FolioConfig, OutputConfig};
pub use destination::{
    Destination, Target, DESTINATION_DOWNLOAD, DESTINATION_FILE, DESTINATION_INLINE,
    DESTINATION_STRING,
};
pub use document::{Document, MIME_TYPE};
pub use error::{OutputError, PdfError};
pub use factory::DocumentFactory;
pub use generator::{DocumentGenerator, View};
pub use output::{Output, OutputDispatcher, DEFAULT_DIRECTORY_MODE};
pub use pdf::Pdf;
pub use response::{ContentDisposition, DownloadResponseFactory, ResponseFactory};

pub use folio_render_core::{EngineOptions, Orientation, PageSize, PdfEngine, RenderError, Unit};
pub use folio_render_lopdf::LopdfEngine;
