//! Common types for the changelog parser

use indexmap::IndexMap;
use serde::Serialize;

/// Release notes recorded for a single version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogEntry {
    /// First line of the release body (e.g., "Initial release")
    pub title: String,
    /// Remaining lines of the release body, joined with `\n`
    pub content: String,
}

impl ChangelogEntry {
    /// Build an entry from a release body.
    ///
    /// The body is trimmed, the first line becomes the title and the rest
    /// (possibly empty) becomes the content.
    pub fn from_body(body: &str) -> Self {
        let mut lines = body.trim().split('\n');
        let title = lines.next().unwrap_or_default().to_string();
        let content = lines.collect::<Vec<_>>().join("\n");
        Self { title, content }
    }
}

/// Mapping from version key to its release notes.
///
/// Keys keep the position of their first appearance in the document; a later
/// block for the same key replaces the entry in place.
pub type ChangelogTable = IndexMap<String, ChangelogEntry>;
