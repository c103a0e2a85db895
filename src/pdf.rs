use crate::config::FolioConfig;
use crate::document::Document;
use crate::error::{OutputError, PdfError};
use crate::factory::DocumentFactory;
use crate::generator::DocumentGenerator;
use crate::output::{Output, OutputDispatcher};
use crate::response::{DownloadResponseFactory, ResponseFactory};
use folio_render_core::PdfEngine;
use folio_render_lopdf::LopdfEngine;
use serde_json::Value;

/// Entry point tying document creation, views and output together.
pub struct Pdf<E = LopdfEngine, F = DownloadResponseFactory> {
    factory: DocumentFactory<E>,
    generator: DocumentGenerator<E>,
    dispatcher: OutputDispatcher<F>,
}

impl<E: PdfEngine, F: ResponseFactory> Pdf<E, F> {
    pub fn new(
        factory: DocumentFactory<E>,
        generator: DocumentGenerator<E>,
        dispatcher: OutputDispatcher<F>,
    ) -> Self {
        Self {
            factory,
            generator,
            dispatcher,
        }
    }

    pub fn from_config(config: FolioConfig, generator: DocumentGenerator<E>, responses: F) -> Self {
        let dispatcher =
            OutputDispatcher::new(responses).with_directory_mode(config.output.directory_mode);
        Self::new(DocumentFactory::new(config.document), generator, dispatcher)
    }

    pub fn factory(&self) -> &DocumentFactory<E> {
        &self.factory
    }

    pub fn generator(&self) -> &DocumentGenerator<E> {
        &self.generator
    }

    pub fn dispatcher(&self) -> &OutputDispatcher<F> {
        &self.dispatcher
    }

    /// A blank document carrying the configured defaults.
    pub fn create(&self) -> Result<Document<E>, PdfError> {
        Ok(self.factory.create()?)
    }

    /// A new document with `view` drawn into it.
    pub fn generate(&self, view: &str, params: &Value) -> Result<Document<E>, PdfError> {
        let document = self.create()?;
        self.generator.generate(document, view, params)
    }

    pub fn output(
        &self,
        document: &Document<E>,
        destination: &str,
    ) -> Result<Output<F::Response>, OutputError> {
        self.dispatcher.dispatch(document, destination)
    }
}
