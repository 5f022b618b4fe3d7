//! Version string normalization
//!
//! Two independent rules:
//! - [`apply_legacy_alpha_alias`] rewrites the mislabeled `2.0.0-alpha.0`
//!   release heading before the document is parsed.
//! - [`strip_prerelease_suffix`] maps a requested alpha build onto the
//!   release whose notes cover it.

use std::borrow::Cow;

/// Release label that was published under an alpha heading
pub const LEGACY_ALPHA_LABEL: &str = "2.0.0-alpha.0";

/// Key the legacy alpha release is recorded under
pub const LEGACY_ALPHA_TARGET: &str = "2.0.0";

/// Marker that starts the pre-release suffix of a requested version
pub const PRERELEASE_MARKER: &str = "-alpha";

/// Replace every occurrence of [`LEGACY_ALPHA_LABEL`] in the raw document
/// with [`LEGACY_ALPHA_TARGET`].
///
/// Mentions in release notes are rewritten too, not only the heading.
/// This is an exact substring replacement, not a version comparison:
/// `2.0.0-alpha.01` is also rewritten, `2.0.0-alpha.1` is not.
pub fn apply_legacy_alpha_alias(raw: &str) -> Cow<'_, str> {
    if raw.contains(LEGACY_ALPHA_LABEL) {
        Cow::Owned(raw.replace(LEGACY_ALPHA_LABEL, LEGACY_ALPHA_TARGET))
    } else {
        Cow::Borrowed(raw)
    }
}

/// Truncate a requested version at the first [`PRERELEASE_MARKER`].
///
/// Examples:
/// - "2.0.0-alpha.5" -> "2.0.0"
/// - "2.0.0-beta.1" -> "2.0.0-beta.1"
/// - "1.4.2" -> "1.4.2"
pub fn strip_prerelease_suffix(version: &str) -> &str {
    match version.find(PRERELEASE_MARKER) {
        Some(pos) => &version[..pos],
        None => version,
    }
}
