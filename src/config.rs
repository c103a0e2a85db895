use crate::error::PdfError;
use crate::output::DEFAULT_DIRECTORY_MODE;
use folio_render_core::EngineOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FolioConfig {
    pub document: DocumentConfig,
    pub output: OutputConfig,
}

/// Engine options and the metadata every new document starts with.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DocumentConfig {
    pub engine: EngineOptions,
    pub author: Option<String>,
    pub creator: Option<String>,
    pub subject: Option<String>,
    pub title: Option<String>,
    pub keywords: Vec<String>,
    pub name: Option<String>,
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Permission bits for created output directories.
    pub directory_mode: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory_mode: DEFAULT_DIRECTORY_MODE,
        }
    }
}

impl FolioConfig {
    pub fn from_json(json: &str) -> Result<Self, PdfError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration file and layers `FOLIO__*` environment
    /// variables on top (e.g. `FOLIO__DOCUMENT__AUTHOR`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PdfError> {
        let path = path.as_ref();
        log::debug!("Loading configuration from {}", path.display());

        let config = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
