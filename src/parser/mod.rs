//! Parser layer
//! - types.rs: Common types (ChangelogEntry, ChangelogTable)
//! - tokenizer.rs: Splits the document into heading and text segments
//! - state.rs: Pairs headings with release bodies

pub mod state;
pub mod tokenizer;
pub mod types;

use tracing::debug;

pub use state::ParserState;
pub use tokenizer::{HeadingTokenizer, Segment};
pub use types::{ChangelogEntry, ChangelogTable};

use crate::version::normalize::apply_legacy_alpha_alias;

/// Parser for version-headed changelog documents
///
/// ```text
/// # `1.1.0`
/// Title line
/// - body line
/// ```
///
/// Parsing never fails: segments that cannot be read as a heading-body pair
/// are left out of the table.
#[derive(Default)]
pub struct ChangelogParser {
    tokenizer: HeadingTokenizer,
}

impl ChangelogParser {
    pub fn new() -> Self {
        Self {
            tokenizer: HeadingTokenizer::new(),
        }
    }

    /// Parse the raw document into a version table
    pub fn parse(&self, raw: &str) -> ChangelogTable {
        let text = apply_legacy_alpha_alias(raw);
        let segments = self.tokenizer.segments(&text);
        debug!("Parsing changelog with {} segments", segments.len());

        let mut table = ChangelogTable::new();
        let state = segments
            .iter()
            .fold(ParserState::AwaitingHeading, |state, segment| {
                state.advance(segment.as_str(), &mut table)
            });
        state.finish();

        table
    }
}

/// Parse a changelog document with a fresh [`ChangelogParser`]
pub fn parse(raw: &str) -> ChangelogTable {
    ChangelogParser::new().parse(raw)
}
