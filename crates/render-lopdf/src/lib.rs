//! PDF engine for folio documents built on the lopdf library.
//!
//! `LopdfEngine` implements `folio_render_core::PdfEngine` and adds the
//! drawing calls views use to put pages and text into a document.

mod engine;
mod fonts;
mod text;

pub use engine::LopdfEngine;
pub use fonts::standard_font_name;
