//! Requested version resolution
//!
//! Maps a version requested by the documentation UI onto a table key and
//! returns its release notes. A version without notes is `None`, never an
//! error.

use tracing::debug;

use crate::parser::{ChangelogEntry, ChangelogTable};
use crate::version::normalize::strip_prerelease_suffix;

/// Look up the entry for `requested_version` after normalizing it.
///
/// Examples:
/// - "2.0.0-alpha.7" looks up "2.0.0"
/// - "1.4.2" looks up "1.4.2"
pub fn lookup<'a>(
    table: &'a ChangelogTable,
    requested_version: &str,
) -> Option<&'a ChangelogEntry> {
    let key = strip_prerelease_suffix(requested_version);
    let entry = table.get(key);

    debug!(
        "Changelog lookup for {:?} (key {:?}): {}",
        requested_version,
        key,
        if entry.is_some() { "found" } else { "not found" }
    );

    entry
}
