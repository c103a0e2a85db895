use folio::{
    DocumentGenerator, DownloadResponseFactory, FolioConfig, LopdfEngine, Pdf, RenderError,
};
use serde_json::Value;

pub const TEST_VIEW: &str = "testView";

/// A one page view: margins, page breaks, a bold italic font and a line of text
pub fn test_view(engine: &mut LopdfEngine, _params: &Value) -> Result<(), RenderError> {
    engine.set_margins(15.0, 27.0);
    engine.set_auto_page_break(true, 25.0);
    engine.set_font("times", "BI", 20.0)?;
    engine.add_page();
    engine.write("Test text")
}

/// A Pdf facade with default configuration and the test view registered
pub fn pdf() -> Pdf<LopdfEngine, DownloadResponseFactory> {
    pdf_with_config(FolioConfig::default())
}

pub fn pdf_with_config(config: FolioConfig) -> Pdf<LopdfEngine, DownloadResponseFactory> {
    let generator = DocumentGenerator::<LopdfEngine>::new().with_view(TEST_VIEW, test_view);
    Pdf::from_config(config, generator, DownloadResponseFactory)
}
