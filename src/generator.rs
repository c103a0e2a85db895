// src/generator.rs
use crate::document::Document;
use crate::error::PdfError;
use folio_render_core::{PdfEngine, RenderError};
use folio_render_lopdf::LopdfEngine;
use serde_json::Value;
use std::collections::HashMap;

/// A drawing routine that fills a document's engine with page content.
pub trait View<E> {
    fn render(&self, engine: &mut E, params: &Value) -> Result<(), RenderError>;
}

impl<E, F> View<E> for F
where
    F: Fn(&mut E, &Value) -> Result<(), RenderError>,
{
    fn render(&self, engine: &mut E, params: &Value) -> Result<(), RenderError> {
        self(engine, params)
    }
}

/// Registry of named views.
pub struct DocumentGenerator<E = LopdfEngine> {
    views: HashMap<String, Box<dyn View<E>>>,
}

impl<E: PdfEngine> DocumentGenerator<E> {
    pub fn new() -> Self {
        Self {
            views: HashMap::new(),
        }
    }

    /// Adds a view, replacing any view already registered under `name`.
    pub fn register(&mut self, name: impl Into<String>, view: impl View<E> + 'static) {
        self.views.insert(name.into(), Box::new(view));
    }

    pub fn with_view(mut self, name: impl Into<String>, view: impl View<E> + 'static) -> Self {
        self.register(name, view);
        self
    }

    pub fn has_view(&self, name: &str) -> bool {
        self.views.contains_key(name)
    }

    /// Draws the view called `view` into `document`.
    pub fn generate(
        &self,
        document: Document<E>,
        view: &str,
        params: &Value,
    ) -> Result<Document<E>, PdfError> {
        let renderer = self
            .views
            .get(view)
            .ok_or_else(|| PdfError::ViewNotFound(view.to_string()))?;

        log::debug!("Rendering view '{}'", view);
        Ok(document.draw(|engine| renderer.render(engine, params))?)
    }
}

impl<E: PdfEngine> Default for DocumentGenerator<E> {
    fn default() -> Self {
        Self::new()
    }
}
