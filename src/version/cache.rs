//! Build-once changelog table cache
//!
//! [`ChangelogCache`] reads and parses its source on the first request and
//! serves every later request from the stored table. Concurrent first
//! requests wait for a single parse.
//!
//! The process-wide cache is configured with [`install_source`] before first
//! use, or falls back to the bundled changelog.

use std::sync::OnceLock;

use tracing::{debug, info};

use crate::parser::{ChangelogEntry, ChangelogParser, ChangelogTable};
use crate::version::error::InstallError;
use crate::version::resolver::lookup;
use crate::version::source::{DocumentSource, TextSource};

pub struct ChangelogCache {
    source: Box<dyn DocumentSource>,
    table: OnceLock<ChangelogTable>,
}

impl ChangelogCache {
    pub fn new(source: impl DocumentSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            table: OnceLock::new(),
        }
    }

    /// Get the table, parsing the source on first call
    pub fn get(&self) -> &ChangelogTable {
        self.table.get_or_init(|| {
            let text = self.source.text();
            let table = ChangelogParser::new().parse(&text);
            info!(
                "Changelog table built with {} versions from {} bytes",
                table.len(),
                text.len()
            );
            table
        })
    }

    /// Look up the notes for a requested version
    pub fn entry_for(&self, version: &str) -> Option<&ChangelogEntry> {
        lookup(self.get(), version)
    }

    /// Whether the table has been built yet
    pub fn is_built(&self) -> bool {
        self.table.get().is_some()
    }
}

static GLOBAL: OnceLock<ChangelogCache> = OnceLock::new();

/// Configure the process-wide cache with `source`.
///
/// Fails if a source was already installed or the cache was already used.
pub fn install_source(source: impl DocumentSource + 'static) -> Result<(), InstallError> {
    GLOBAL
        .set(ChangelogCache::new(source))
        .map_err(|_| InstallError::AlreadyInstalled)?;
    debug!("Installed process-wide changelog source");
    Ok(())
}

/// The process-wide cache
pub fn global() -> &'static ChangelogCache {
    GLOBAL.get_or_init(|| {
        debug!("No changelog source installed, using the bundled changelog");
        ChangelogCache::new(TextSource::bundled())
    })
}

/// Full version table of the process-wide cache
pub fn get_changelog() -> &'static ChangelogTable {
    global().get()
}

/// Release notes for `version` from the process-wide cache.
///
/// Alpha builds resolve to their release (`2.0.0-alpha.7` -> `2.0.0`).
pub fn get_changelog_for_version(version: &str) -> Option<&'static ChangelogEntry> {
    global().entry_for(version)
}
