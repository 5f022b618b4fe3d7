//! Shared changelog documents for integration tests

/// Three releases, including the mislabeled 2.0.0 alpha heading
pub const RELEASES: &str = "\
Release notes for the docs site.

# `2.1.0`
Grouping

- Panels can be grouped.

# `2.0.0-alpha.0`
New shell

- Rewritten layout.
- Loading placeholders.

# `1.0.0`
Initial release
";
