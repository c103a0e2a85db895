use crate::error::RenderError;
use crate::options::EngineOptions;

/// The slice of a PDF engine that documents depend on.
///
/// Page layout and drawing are backend specific and stay on the concrete
/// engine type; only metadata and the final byte stream are shared.
pub trait PdfEngine: Clone {
    /// Public name of the engine, used as the default document creator.
    const NAME: &'static str;

    fn new(options: EngineOptions) -> Result<Self, RenderError>;

    fn set_author(&mut self, author: &str);

    fn set_creator(&mut self, creator: &str);

    fn set_keywords(&mut self, keywords: &str);

    fn set_subject(&mut self, subject: &str);

    fn set_title(&mut self, title: &str);

    /// Renders the complete document and returns the PDF byte stream.
    fn render(&self) -> Result<Vec<u8>, RenderError>;
}
