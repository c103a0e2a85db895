//! The immutable document value wrapping one engine instance.
use folio_render_core::{EngineOptions, PdfEngine, RenderError};
use folio_render_lopdf::LopdfEngine;
use std::path::{Path, PathBuf};

/// MIME type of every rendered document.
pub const MIME_TYPE: &str = "application/pdf";

/// A single field change applied by `Document::with_change`.
enum Change {
    Author(String),
    Creator(String),
    Keywords(String),
    Subject(String),
    Title(String),
    Name(String),
    Path(PathBuf),
}

/// One in-progress or finished PDF.
///
/// Every `with_*` call returns a new document holding a deep copy of the
/// engine, so the receiver is never changed. Author, creator, keywords,
/// subject and title are mirrored into the engine; name and path only
/// decide where output goes.
#[derive(Debug, Clone)]
pub struct Document<E = LopdfEngine> {
    engine: E,
    author: String,
    creator: String,
    keywords: String,
    subject: String,
    title: String,
    name: String,
    path: PathBuf,
}

impl<E: PdfEngine> Document<E> {
    /// Constructs the engine and records its name as the creator.
    pub fn new(options: EngineOptions) -> Result<Self, RenderError> {
        let mut engine = E::new(options)?;
        let creator = E::NAME.to_string();
        engine.set_creator(&creator);

        Ok(Self {
            engine,
            author: String::new(),
            creator,
            keywords: String::new(),
            subject: String::new(),
            title: String::new(),
            name: String::new(),
            path: PathBuf::new(),
        })
    }

    /// Name of the entity (person, organisation, ...) that created the document.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Name of the package used to create the document.
    pub fn creator(&self) -> &str {
        &self.creator
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    /// Name of the document when displayed in the browser, downloaded, or saved.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory the document is saved in.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn with_author(&self, author: impl Into<String>) -> Self {
        self.with_change(Change::Author(author.into()))
    }

    pub fn with_creator(&self, creator: impl Into<String>) -> Self {
        self.with_change(Change::Creator(creator.into()))
    }

    /// Joins the keywords with `", "`.
    pub fn with_keywords<I, S>(&self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = keywords
            .into_iter()
            .map(|k| k.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        self.with_change(Change::Keywords(joined))
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        self.with_change(Change::Name(name.into()))
    }

    pub fn with_path(&self, path: impl Into<PathBuf>) -> Self {
        self.with_change(Change::Path(path.into()))
    }

    pub fn with_subject(&self, subject: impl Into<String>) -> Self {
        self.with_change(Change::Subject(subject.into()))
    }

    pub fn with_title(&self, title: impl Into<String>) -> Self {
        self.with_change(Change::Title(title.into()))
    }

    /// Hands the engine to a drawing routine and returns the drawn document.
    pub fn draw<F>(mut self, draw: F) -> Result<Self, RenderError>
    where
        F: FnOnce(&mut E) -> Result<(), RenderError>,
    {
        draw(&mut self.engine)?;
        Ok(self)
    }

    /// Renders the finished PDF byte stream.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RenderError> {
        self.engine.render()
    }

    fn with_change(&self, change: Change) -> Self {
        let mut new = self.clone();
        match change {
            Change::Author(author) => {
                new.engine.set_author(&author);
                new.author = author;
            }
            Change::Creator(creator) => {
                new.engine.set_creator(&creator);
                new.creator = creator;
            }
            Change::Keywords(keywords) => {
                new.engine.set_keywords(&keywords);
                new.keywords = keywords;
            }
            Change::Subject(subject) => {
                new.engine.set_subject(&subject);
                new.subject = subject;
            }
            Change::Title(title) => {
                new.engine.set_title(&title);
                new.title = title;
            }
            Change::Name(name) => new.name = name,
            Change::Path(path) => new.path = path,
        }
        new
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Engine double that records what the document forwards to it.
    #[derive(Debug, Clone, Default)]
    struct RecordingEngine {
        calls: Vec<(&'static str, String)>,
    }

    impl PdfEngine for RecordingEngine {
        const NAME: &'static str = "RecordingEngine";

        fn new(_options: EngineOptions) -> Result<Self, RenderError> {
            Ok(Self::default())
        }

        fn set_author(&mut self, author: &str) {
            self.calls.push(("author", author.to_string()));
        }

        fn set_creator(&mut self, creator: &str) {
            self.calls.push(("creator", creator.to_string()));
        }

        fn set_keywords(&mut self, keywords: &str) {
            self.calls.push(("keywords", keywords.to_string()));
        }

        fn set_subject(&mut self, subject: &str) {
            self.calls.push(("subject", subject.to_string()));
        }

        fn set_title(&mut self, title: &str) {
            self.calls.push(("title", title.to_string()));
        }

        fn render(&self) -> Result<Vec<u8>, RenderError> {
            Ok(b"%PDF-test".to_vec())
        }
    }

    fn document() -> Document<RecordingEngine> {
        Document::new(EngineOptions::default()).unwrap()
    }

    #[test]
    fn test_default_creator_is_engine_type() {
        let document = document();
        assert_eq!(document.creator(), RecordingEngine::NAME);
        assert_eq!(
            document.engine().calls,
            vec![("creator", document.creator().to_string())]
        );
    }

    #[test]
    fn test_metadata_is_forwarded() {
        let document = document()
            .with_author("a")
            .with_subject("s")
            .with_title("t")
            .with_keywords(["k1", "k2"]);

        let calls = &document.engine().calls;
        assert!(calls.contains(&("author", "a".to_string())));
        assert!(calls.contains(&("subject", "s".to_string())));
        assert!(calls.contains(&("title", "t".to_string())));
        assert!(calls.contains(&("keywords", "k1, k2".to_string())));
    }

    #[test]
    fn test_name_and_path_stay_local() {
        let document = document();
        let before = document.engine().calls.len();
        let routed = document.with_name("out.pdf").with_path("/tmp/out");

        assert_eq!(routed.engine().calls.len(), before);
        assert_eq!(routed.name(), "out.pdf");
        assert_eq!(routed.path(), Path::new("/tmp/out"));
    }

    #[test]
    fn test_with_does_not_touch_receiver() {
        let original = document().with_title("first");
        let changed = original.with_title("second");

        assert_eq!(original.title(), "first");
        assert_eq!(changed.title(), "second");
        assert_eq!(original.engine().calls.len() + 1, changed.engine().calls.len());
    }

    #[test]
    fn test_empty_keywords() {
        let document = document().with_keywords(Vec::<String>::new());
        assert_eq!(document.keywords(), "");
    }

    #[test]
    fn test_draw_failure_propagates() {
        let result = document().draw(|_| Err(RenderError::Other("boom".into())));
        assert!(matches!(result, Err(RenderError::Other(_))));
    }
}
