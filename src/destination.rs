//! Output destination codes.
use crate::error::OutputError;
use std::fmt;
use std::str::FromStr;

pub const DESTINATION_DOWNLOAD: &str = "D";
pub const DESTINATION_FILE: &str = "F";
pub const DESTINATION_INLINE: &str = "I";
pub const DESTINATION_STRING: &str = "S";

/// The terminal part of a destination, evaluated at most once per dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// HTTP response asking the client to save the document.
    Download,
    /// HTTP response asking the client to display the document.
    Inline,
    /// The rendered bytes themselves.
    String,
}

impl Target {
    pub fn code(&self) -> &'static str {
        match self {
            Target::Download => DESTINATION_DOWNLOAD,
            Target::Inline => DESTINATION_INLINE,
            Target::String => DESTINATION_STRING,
        }
    }
}

/// Where a rendered document goes.
///
/// `file` asks for a copy on disk and combines with any target. A
/// destination always has at least one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Destination {
    file: bool,
    target: Option<Target>,
}

impl Destination {
    pub fn file() -> Self {
        Self {
            file: true,
            target: None,
        }
    }

    pub fn download() -> Self {
        Self::to(Target::Download)
    }

    pub fn inline() -> Self {
        Self::to(Target::Inline)
    }

    pub fn string() -> Self {
        Self::to(Target::String)
    }

    pub fn to(target: Target) -> Self {
        Self {
            file: false,
            target: Some(target),
        }
    }

    /// Also writes the document to disk before the target is evaluated.
    pub fn and_file(mut self) -> Self {
        self.file = true;
        self
    }

    pub fn writes_file(&self) -> bool {
        self.file
    }

    pub fn target(&self) -> Option<Target> {
        self.target
    }

    /// True when the destination needs the document's name.
    pub fn requires_name(&self) -> bool {
        self.file || matches!(self.target, Some(Target::Download | Target::Inline))
    }
}

impl FromStr for Destination {
    type Err = OutputError;

    /// Parses codes such as `"S"`, `"F"` or `"FD"`. Every `F` is removed and
    /// marks a file write; whatever is left must be empty or exactly one of
    /// `D`, `I`, `S`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let file = s.contains(DESTINATION_FILE);
        let rest = s.replace(DESTINATION_FILE, "");

        let target = match rest.as_str() {
            "" if file => None,
            DESTINATION_DOWNLOAD => Some(Target::Download),
            DESTINATION_INLINE => Some(Target::Inline),
            DESTINATION_STRING => Some(Target::String),
            _ => return Err(OutputError::InvalidDestination),
        };

        Ok(Self { file, target })
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.file {
            f.write_str(DESTINATION_FILE)?;
        }
        if let Some(target) = self.target {
            f.write_str(target.code())?;
        }
        Ok(())
    }
}
