//! HTTP responses carrying a rendered document.
use crate::error::OutputError;
use http::{header, Response, StatusCode};

/// How the client should treat the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentDisposition {
    Attachment,
    Inline,
}

impl ContentDisposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentDisposition::Attachment => "attachment",
            ContentDisposition::Inline => "inline",
        }
    }

    /// Builds the `Content-Disposition` header value for `filename`.
    ///
    /// Names outside printable ASCII get an ASCII fallback in `filename` and
    /// the exact name in an RFC 5987 `filename*` parameter.
    pub fn header_value(&self, filename: &str) -> String {
        let fallback: String = filename
            .chars()
            .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '_' })
            .collect();
        let escaped = fallback.replace('\\', "\\\\").replace('"', "\\\"");

        if fallback == filename {
            format!("{}; filename=\"{}\"", self.as_str(), escaped)
        } else {
            format!(
                "{}; filename=\"{}\"; filename*=UTF-8''{}",
                self.as_str(),
                escaped,
                urlencoding::encode(filename)
            )
        }
    }
}

/// Builds the HTTP response for download and inline destinations.
pub trait ResponseFactory {
    type Response;

    fn send_content_as_file(
        &self,
        content: Vec<u8>,
        filename: &str,
        disposition: ContentDisposition,
        mime_type: &str,
    ) -> Result<Self::Response, OutputError>;
}

/// Produces `http::Response<Vec<u8>>` values with the document as the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct DownloadResponseFactory;

impl ResponseFactory for DownloadResponseFactory {
    type Response = Response<Vec<u8>>;

    fn send_content_as_file(
        &self,
        content: Vec<u8>,
        filename: &str,
        disposition: ContentDisposition,
        mime_type: &str,
    ) -> Result<Self::Response, OutputError> {
        let response = Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime_type)
            .header(header::CONTENT_LENGTH, content.len().to_string())
            .header(
                header::CONTENT_DISPOSITION,
                disposition.header_value(filename),
            )
            .body(content)?;
        Ok(response)
    }
}
