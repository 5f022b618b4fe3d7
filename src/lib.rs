//! Per-version changelog lookup
//!
//! Parses a changelog made of version headings followed by free-form release
//! notes into a table keyed by version, built once per process.
//!
//! ```text
//! # `2.1.0`
//! Grouped panels
//! - Panels can be grouped by category.
//! ```
//!
//! - [`parser`]: Document segmentation and the heading/body state machine
//! - [`version`]: Sources, build-once cache and version resolution
//! - [`config`]: Application configuration and data paths
//! - [`logging`]: Tracing subscriber setup

pub mod config;
pub mod logging;
pub mod parser;
pub mod version;

pub use parser::{ChangelogEntry, ChangelogTable, parse};
pub use version::cache::{
    ChangelogCache, get_changelog, get_changelog_for_version, install_source,
};
pub use version::source::{DocumentSource, FileSource, TextSource};
