//! Raw document sources

use std::borrow::Cow;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;
use tracing::debug;

use crate::version::error::SourceError;

/// Changelog compiled into the crate, used when no other source is installed
const BUNDLED_CHANGELOG: &str = include_str!("../../data/changelog.md");

/// Trait for supplying the raw changelog text
#[cfg_attr(test, automock)]
pub trait DocumentSource: Send + Sync {
    /// Return the full document text
    fn text(&self) -> String;
}

/// Document held in memory
#[derive(Debug, Clone)]
pub struct TextSource {
    text: Cow<'static, str>,
}

impl TextSource {
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self { text: text.into() }
    }

    /// The changelog shipped with this crate
    pub fn bundled() -> Self {
        Self::new(BUNDLED_CHANGELOG)
    }
}

impl DocumentSource for TextSource {
    fn text(&self) -> String {
        self.text.to_string()
    }
}

/// Document read from a file when the source is opened
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    text: String,
}

impl FileSource {
    /// Read the file at `path`. A leading byte-order mark is dropped.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();
        let text = std::fs::read_to_string(&path).map_err(|source| SourceError::Read {
            path: path.clone(),
            source,
        })?;
        let text = match text.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => text,
        };
        debug!("Read {} bytes of changelog from {:?}", text.len(), path);

        Ok(Self { path, text })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for FileSource {
    fn text(&self) -> String {
        self.text.clone()
    }
}
