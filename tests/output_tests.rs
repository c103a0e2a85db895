mod common;

use common::GeneratedPdf;
use common::fixtures::{TEST_VIEW, pdf};
use folio::{
    ContentDisposition, DESTINATION_DOWNLOAD, DESTINATION_FILE, DESTINATION_INLINE,
    DESTINATION_STRING, Destination, Document, EngineOptions, LopdfEngine, MIME_TYPE, Output,
    OutputDispatcher, OutputError, PdfEngine, RenderError, ResponseFactory,
};
use http::header;
use serde_json::Value;

const INVALID_DESTINATION: &str = "X";

fn generated() -> Document<LopdfEngine> {
    pdf()
        .generate(TEST_VIEW, &Value::Null)
        .unwrap()
        .with_subject("Test String")
}

#[test]
fn test_output_string() {
    let pdf = pdf();
    let document = generated();

    let content = pdf
        .output(&document, DESTINATION_STRING)
        .unwrap()
        .into_content()
        .unwrap();

    assert!(content.starts_with(b"%PDF"));
    let parsed = GeneratedPdf::from_bytes(content).unwrap();
    assert_eq!(parsed.info("Subject").as_deref(), Some("Test String"));
}

#[test]
fn test_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("support").join("pdf");
    let document = generated().with_name("test.pdf").with_path(&path);

    let output = pdf().output(&document, DESTINATION_FILE).unwrap();
    assert_eq!(output.saved(), Some(true));

    let written = std::fs::read(path.join("test.pdf")).unwrap();
    assert!(!written.is_empty());
    assert!(written.starts_with(b"%PDF"));
}

#[test]
fn test_output_file_requires_name() {
    let dir = tempfile::tempdir().unwrap();
    let document = generated().with_path(dir.path());

    let err = pdf().output(&document, DESTINATION_FILE).unwrap_err();
    assert!(matches!(err, OutputError::NameNotSet));
    assert_eq!(err.to_string(), "Filename not set");
}

#[test]
fn test_output_file_requires_path() {
    let document = generated().with_name("test.pdf");

    let err = pdf().output(&document, DESTINATION_FILE).unwrap_err();
    assert!(matches!(err, OutputError::DirectoryNotCreated(ref p) if p.as_os_str().is_empty()));
    assert_eq!(err.to_string(), "Directory '' was not created");
    assert!(!std::path::Path::new("test.pdf").exists());
}

#[test]
fn test_output_file_stays_inside_path() {
    let dir = tempfile::tempdir().unwrap();
    let reports = dir.path().join("reports");
    let escaped = dir.path().join("escaped.pdf");

    for name in [escaped.to_str().unwrap(), "../escaped.pdf", "nested/test.pdf"] {
        let document = generated().with_name(name).with_path(&reports);
        let err = pdf().output(&document, DESTINATION_FILE).unwrap_err();
        assert!(matches!(err, OutputError::InvalidName(ref n) if n == name));
    }

    assert!(!escaped.exists());
    assert!(!reports.exists());
}

#[test]
fn test_output_download() {
    let document = generated().with_name("test.pdf");

    let response = pdf()
        .output(&document, DESTINATION_DOWNLOAD)
        .unwrap()
        .into_http_response()
        .unwrap();

    assert_eq!(response.status(), http::StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], MIME_TYPE);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"test.pdf\""
    );
    assert_eq!(
        response.headers()[header::CONTENT_LENGTH],
        response.body().len().to_string().as_str()
    );
    assert!(response.body().starts_with(b"%PDF"));
    assert_eq!(
        GeneratedPdf::from_bytes(response.body().clone())
            .unwrap()
            .page_count(),
        1
    );
}

#[test]
fn test_output_inline() {
    let document = generated().with_name("test.pdf");

    let response = pdf()
        .output(&document, DESTINATION_INLINE)
        .unwrap()
        .into_http_response()
        .unwrap();

    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "inline; filename=\"test.pdf\""
    );
    assert!(response.body().starts_with(b"%PDF"));
}

#[test]
fn test_download_and_inline_require_name() {
    let pdf = pdf();
    let document = generated();

    for destination in [DESTINATION_DOWNLOAD, DESTINATION_INLINE] {
        let err = pdf.output(&document, destination).unwrap_err();
        assert!(matches!(err, OutputError::NameNotSet));
        assert_eq!(err.to_string(), "Filename not set");
    }
}

#[test]
fn test_invalid_destination() {
    let err = pdf()
        .output(&generated(), INVALID_DESTINATION)
        .unwrap_err();

    assert!(matches!(err, OutputError::InvalidDestination));
    assert_eq!(err.to_string(), "Invalid output destination");
}

#[test]
fn test_invalid_code_with_file_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never");
    let document = generated().with_name("test.pdf").with_path(&path);

    let err = pdf().output(&document, "FX").unwrap_err();
    assert!(matches!(err, OutputError::InvalidDestination));
    assert!(!path.exists());
}

#[test]
fn test_file_and_string() {
    let dir = tempfile::tempdir().unwrap();
    let document = generated().with_name("both.pdf").with_path(dir.path());

    let content = pdf()
        .output(&document, "FS")
        .unwrap()
        .into_content()
        .unwrap();

    assert!(content.starts_with(b"%PDF"));
    let written = std::fs::read(dir.path().join("both.pdf")).unwrap();
    assert_eq!(written, content);
}

#[test]
fn test_file_and_download_in_any_order() {
    let dir = tempfile::tempdir().unwrap();
    let document = generated().with_name("both.pdf").with_path(dir.path());

    let response = pdf()
        .output(&document, "DF")
        .unwrap()
        .into_http_response()
        .unwrap();

    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"both.pdf\""
    );
    assert!(dir.path().join("both.pdf").is_file());
}

#[test]
fn test_directory_not_created() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let path = blocker.join("pdf");
    let document = generated().with_name("test.pdf").with_path(&path);

    let err = pdf().output(&document, DESTINATION_FILE).unwrap_err();
    assert!(matches!(err, OutputError::DirectoryNotCreated(ref p) if *p == path));
    assert_eq!(
        err.to_string(),
        format!("Directory '{}' was not created", path.display())
    );
}

#[test]
fn test_failed_write_is_soft() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should go makes the write itself fail.
    std::fs::create_dir(dir.path().join("taken.pdf")).unwrap();
    let document = generated().with_name("taken.pdf").with_path(dir.path());

    let output = pdf().output(&document, DESTINATION_FILE).unwrap();
    assert_eq!(output.saved(), Some(false));
}

#[test]
fn test_document_is_reusable_after_failure() {
    let pdf = pdf();
    let document = generated();

    assert!(pdf.output(&document, DESTINATION_DOWNLOAD).is_err());
    assert!(pdf.output(&document, INVALID_DESTINATION).is_err());

    let content = pdf
        .output(&document, DESTINATION_STRING)
        .unwrap()
        .into_content()
        .unwrap();
    assert!(content.starts_with(b"%PDF"));
}

/// An engine whose output depends only on its metadata.
#[derive(Debug, Clone)]
struct FixedEngine {
    title: String,
}

impl PdfEngine for FixedEngine {
    const NAME: &'static str = "FixedEngine";

    fn new(_options: EngineOptions) -> Result<Self, RenderError> {
        Ok(Self {
            title: String::new(),
        })
    }

    fn set_author(&mut self, _author: &str) {}

    fn set_creator(&mut self, _creator: &str) {}

    fn set_keywords(&mut self, _keywords: &str) {}

    fn set_subject(&mut self, _subject: &str) {}

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn render(&self) -> Result<Vec<u8>, RenderError> {
        Ok(format!("%PDF-1.7 {}", self.title).into_bytes())
    }
}

fn fixed_document() -> Document<FixedEngine> {
    Document::new(EngineOptions::default())
        .unwrap()
        .with_title("Fixed")
        .with_name("fixed.pdf")
}

#[test]
fn test_download_body_is_serialized_document() {
    let document = fixed_document();
    let dispatcher: OutputDispatcher = OutputDispatcher::default();

    for destination in [DESTINATION_DOWNLOAD, DESTINATION_INLINE] {
        let response = dispatcher
            .dispatch(&document, destination)
            .unwrap()
            .into_http_response()
            .unwrap();

        assert_eq!(response.body(), &document.to_bytes().unwrap());
        assert_eq!(
            response.headers()[header::CONTENT_LENGTH],
            document.to_bytes().unwrap().len().to_string().as_str()
        );
    }
}

#[test]
fn test_string_and_file_are_serialized_document() {
    let dir = tempfile::tempdir().unwrap();
    let document = fixed_document().with_path(dir.path());
    let dispatcher: OutputDispatcher = OutputDispatcher::default();

    let content = dispatcher
        .dispatch(&document, "FS")
        .unwrap()
        .into_content()
        .unwrap();

    assert_eq!(content, b"%PDF-1.7 Fixed".to_vec());
    assert_eq!(std::fs::read(dir.path().join("fixed.pdf")).unwrap(), content);
}

/// Captures the arguments the dispatcher hands to the factory.
struct RecordingFactory;

impl ResponseFactory for RecordingFactory {
    type Response = (Vec<u8>, String, ContentDisposition, String);

    fn send_content_as_file(
        &self,
        content: Vec<u8>,
        filename: &str,
        disposition: ContentDisposition,
        mime_type: &str,
    ) -> Result<Self::Response, OutputError> {
        Ok((
            content,
            filename.to_string(),
            disposition,
            mime_type.to_string(),
        ))
    }
}

#[test]
fn test_custom_response_factory() {
    let dispatcher = OutputDispatcher::new(RecordingFactory);
    let document = fixed_document().with_name("custom.pdf");

    let output = dispatcher
        .dispatch_to(&document, Destination::inline())
        .unwrap();
    let Output::Response((content, filename, disposition, mime_type)) = output else {
        panic!("expected a response");
    };

    assert_eq!(content, document.to_bytes().unwrap());
    assert_eq!(filename, "custom.pdf");
    assert_eq!(disposition, ContentDisposition::Inline);
    assert_eq!(mime_type, MIME_TYPE);
}

#[cfg(unix)]
#[test]
fn test_directory_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("private");
    let document = Document::<LopdfEngine>::new(EngineOptions::default())
        .unwrap()
        .with_name("test.pdf")
        .with_path(&path);

    let dispatcher: OutputDispatcher = OutputDispatcher::default().with_directory_mode(0o700);
    let output = dispatcher
        .dispatch_to(&document, Destination::file())
        .unwrap();

    assert_eq!(output.saved(), Some(true));
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o700);
}
