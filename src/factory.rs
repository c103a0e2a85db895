use crate::config::DocumentConfig;
use crate::document::Document;
use folio_render_core::{PdfEngine, RenderError};
use folio_render_lopdf::LopdfEngine;
use std::marker::PhantomData;

/// Creates documents from a `DocumentConfig`.
#[derive(Debug, Clone)]
pub struct DocumentFactory<E = LopdfEngine> {
    config: DocumentConfig,
    _engine: PhantomData<fn() -> E>,
}

impl<E: PdfEngine> DocumentFactory<E> {
    pub fn new(config: DocumentConfig) -> Self {
        Self {
            config,
            _engine: PhantomData,
        }
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    pub fn create(&self) -> Result<Document<E>, RenderError> {
        let config = &self.config;
        let mut document = Document::new(config.engine.clone())?;

        if let Some(author) = &config.author {
            document = document.with_author(author);
        }
        if let Some(creator) = &config.creator {
            document = document.with_creator(creator);
        }
        if let Some(subject) = &config.subject {
            document = document.with_subject(subject);
        }
        if let Some(title) = &config.title {
            document = document.with_title(title);
        }
        if !config.keywords.is_empty() {
            document = document.with_keywords(&config.keywords);
        }
        if let Some(name) = &config.name {
            document = document.with_name(name);
        }
        if let Some(path) = &config.path {
            document = document.with_path(path);
        }

        Ok(document)
    }
}

impl<E: PdfEngine> Default for DocumentFactory<E> {
    fn default() -> Self {
        Self::new(DocumentConfig::default())
    }
}
