use std::cmp::Reverse;

use semver::Version;

use crate::parser::ChangelogTable;

/// Parse a version key into a semver::Version, normalizing partial versions.
///
/// Strips a leading 'v' and pads partial versions with zeros.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "v1.2" -> Version(1, 2, 0)
/// - "1.2.3" -> Version(1, 2, 3)
pub fn parse_version(version: &str) -> Option<Version> {
    let version = version.strip_prefix('v').unwrap_or(version);
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// List the versions of a table, newest first.
///
/// Keys that are not versions (e.g., "unreleased") come last, in document
/// order.
pub fn versions_newest_first(table: &ChangelogTable) -> Vec<&str> {
    let mut versions: Vec<(&str, Option<Version>)> = table
        .keys()
        .map(|key| (key.as_str(), parse_version(key)))
        .collect();

    // Stable sort: None sorts below every Some, and ties keep document order.
    versions.sort_by_key(|(_, parsed)| Reverse(parsed.clone()));

    versions.into_iter().map(|(key, _)| key).collect()
}
