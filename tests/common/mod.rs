pub mod fixtures;

use lopdf::Document as LopdfDocument;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Read an ASCII entry of the document information dictionary
    pub fn info(&self, key: &str) -> Option<String> {
        let info_id = self.doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
        let info = self.doc.get_object(info_id).ok()?.as_dict().ok()?;
        let value = info.get(key.as_bytes()).ok()?.as_str().ok()?;
        Some(String::from_utf8_lossy(value).to_string())
    }
}
