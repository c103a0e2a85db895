//! Routing a rendered document to bytes, a file, or an HTTP response.
use crate::destination::{Destination, Target};
use crate::document::{Document, MIME_TYPE};
use crate::error::OutputError;
use crate::response::{ContentDisposition, DownloadResponseFactory, ResponseFactory};
use folio_render_core::PdfEngine;
use std::fs::DirBuilder;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Permissions for directories created by file output (before the umask).
pub const DEFAULT_DIRECTORY_MODE: u32 = 0o766;

/// The result of dispatching a document.
#[derive(Debug)]
pub enum Output<R> {
    /// File-only destination: whether the file was written.
    Saved(bool),
    /// The rendered PDF bytes.
    Content(Vec<u8>),
    /// A download or inline response.
    Response(R),
}

impl<R> Output<R> {
    pub fn saved(&self) -> Option<bool> {
        match self {
            Output::Saved(saved) => Some(*saved),
            _ => None,
        }
    }

    pub fn into_content(self) -> Option<Vec<u8>> {
        match self {
            Output::Content(content) => Some(content),
            _ => None,
        }
    }

    pub fn into_http_response(self) -> Option<R> {
        match self {
            Output::Response(response) => Some(response),
            _ => None,
        }
    }
}

/// Sends documents to their destination.
#[derive(Debug, Clone)]
pub struct OutputDispatcher<F = DownloadResponseFactory> {
    responses: F,
    directory_mode: u32,
}

impl Default for OutputDispatcher<DownloadResponseFactory> {
    fn default() -> Self {
        Self::new(DownloadResponseFactory)
    }
}

impl<F: ResponseFactory> OutputDispatcher<F> {
    pub fn new(responses: F) -> Self {
        Self {
            responses,
            directory_mode: DEFAULT_DIRECTORY_MODE,
        }
    }

    /// Sets the permission bits used when the output directory is created.
    /// Only applies on unix.
    pub fn with_directory_mode(mut self, mode: u32) -> Self {
        self.directory_mode = mode;
        self
    }

    pub fn directory_mode(&self) -> u32 {
        self.directory_mode
    }

    pub fn responses(&self) -> &F {
        &self.responses
    }

    /// Parses a destination code (`"S"`, `"F"`, `"FD"`, ...) and dispatches.
    pub fn dispatch<E: PdfEngine>(
        &self,
        document: &Document<E>,
        destination: &str,
    ) -> Result<Output<F::Response>, OutputError> {
        let destination = destination.parse::<Destination>()?;
        self.dispatch_to(document, destination)
    }

    /// Renders the document once, writes the file if asked to, then
    /// evaluates the target.
    pub fn dispatch_to<E: PdfEngine>(
        &self,
        document: &Document<E>,
        destination: Destination,
    ) -> Result<Output<F::Response>, OutputError> {
        log::debug!(
            "Dispatching document '{}' to destination '{}'",
            document.name(),
            destination
        );

        if destination.requires_name() && document.name().is_empty() {
            return Err(OutputError::NameNotSet);
        }

        let file = if destination.writes_file() {
            Some(file_target(document)?)
        } else {
            None
        };

        let content = document.to_bytes()?;

        let saved = match file {
            Some(target) => self.save(document.path(), &target, &content)?,
            None => false,
        };

        match destination.target() {
            None => Ok(Output::Saved(saved)),
            Some(Target::String) => Ok(Output::Content(content)),
            Some(Target::Download) => {
                self.respond(document, content, ContentDisposition::Attachment)
            }
            Some(Target::Inline) => self.respond(document, content, ContentDisposition::Inline),
        }
    }

    fn respond<E: PdfEngine>(
        &self,
        document: &Document<E>,
        content: Vec<u8>,
        disposition: ContentDisposition,
    ) -> Result<Output<F::Response>, OutputError> {
        self.responses
            .send_content_as_file(content, document.name(), disposition, MIME_TYPE)
            .map(Output::Response)
    }

    /// Writes `content` to `target` inside `directory`. A missing directory
    /// that cannot be created is an error; a failed write only yields `false`.
    fn save(
        &self,
        directory: &Path,
        target: &Path,
        content: &[u8],
    ) -> Result<bool, OutputError> {
        if !directory.is_dir() {
            match self.create_directory(directory) {
                Ok(()) => log::info!("Created directory {}", directory.display()),
                Err(e) if !directory.is_dir() => {
                    log::error!("Failed to create {}: {}", directory.display(), e);
                    return Err(OutputError::DirectoryNotCreated(directory.to_path_buf()));
                }
                // Created concurrently by someone else.
                Err(_) => {}
            }
        }

        match std::fs::write(target, content) {
            Ok(()) => {
                log::info!("Saved {} bytes to {}", content.len(), target.display());
                Ok(true)
            }
            Err(e) => {
                log::warn!("Failed to write {}: {}", target.display(), e);
                Ok(false)
            }
        }
    }

    fn create_directory(&self, directory: &Path) -> std::io::Result<()> {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(self.directory_mode);
        }
        builder.create(directory)
    }
}

/// Resolves `path/name` for file output. The path must be set and the name
/// must be a bare file name, so the file always lands inside `path`.
fn file_target<E: PdfEngine>(document: &Document<E>) -> Result<PathBuf, OutputError> {
    let directory = document.path();
    if directory.as_os_str().is_empty() {
        return Err(OutputError::DirectoryNotCreated(PathBuf::new()));
    }

    let name = document.name();
    if Path::new(name).file_name() != Some(OsStr::new(name)) {
        return Err(OutputError::InvalidName(name.to_string()));
    }

    Ok(directory.join(name))
}
