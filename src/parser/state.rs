//! Segment state machine
//!
//! Consumes the segments produced by the tokenizer and pairs each heading
//! with the next non-blank segment.

use tracing::debug;

use crate::parser::types::{ChangelogEntry, ChangelogTable};

/// Parser state between two segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserState {
    /// Waiting for a segment that names a version
    AwaitingHeading,
    /// A version was read; the next non-blank segment is its body
    AwaitingContent { pending_version: String },
}

impl ParserState {
    /// Consume one segment, recording an entry in `table` when a body
    /// completes a heading-body pair.
    pub fn advance(self, segment: &str, table: &mut ChangelogTable) -> Self {
        if segment.trim().is_empty() {
            return self;
        }

        match self {
            ParserState::AwaitingHeading => match heading_version(segment) {
                Some(version) => ParserState::AwaitingContent {
                    pending_version: version,
                },
                None => {
                    debug!(
                        "Discarding segment that is not a version heading: {:?}",
                        segment
                    );
                    ParserState::AwaitingHeading
                }
            },
            ParserState::AwaitingContent { pending_version } => {
                let entry = ChangelogEntry::from_body(segment);
                if table.insert(pending_version.clone(), entry).is_some() {
                    debug!(
                        "Version {} appears more than once, keeping the later block",
                        pending_version
                    );
                }
                ParserState::AwaitingHeading
            }
        }
    }

    /// Finish parsing. A heading still waiting for its body is dropped.
    pub fn finish(self) {
        if let ParserState::AwaitingContent { pending_version } = self {
            debug!("Dropping version {} with no release notes", pending_version);
        }
    }
}

/// Extract the version from a heading segment.
///
/// The segment must contain exactly two backticks; the trimmed text between
/// them is the version. An empty version is rejected.
fn heading_version(segment: &str) -> Option<String> {
    let parts: Vec<&str> = segment.split('`').collect();
    let [_, version, _] = parts.as_slice() else {
        return None;
    };

    let version = version.trim();
    if version.is_empty() {
        return None;
    }
    Some(version.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# `1.0.0`\n", Some("1.0.0"))]
    #[case("# ` 1.0.0 `\n", Some("1.0.0"))]
    #[case("Use `npm install` to upgrade", Some("npm install"))]
    #[case("# 1.0.0\n", None)]
    #[case("# `1.0.0\n", None)]
    #[case("# `1.0.0` and `2.0.0`\n", None)]
    #[case("# ``\n", None)]
    #[case("# `   `\n", None)]
    fn heading_version_returns_expected(
        #[case] segment: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(heading_version(segment), expected.map(|s| s.to_string()));
    }

    #[test]
    fn blank_segment_keeps_state() {
        let mut table = ChangelogTable::new();
        let pending = ParserState::AwaitingContent {
            pending_version: "1.0.0".to_string(),
        };

        let state = pending.clone().advance("  \n\n ", &mut table);

        assert_eq!(state, pending);
        assert!(table.is_empty());
        assert_eq!(
            ParserState::AwaitingHeading.advance("", &mut table),
            ParserState::AwaitingHeading
        );
    }

    #[test]
    fn heading_then_body_records_entry() {
        let mut table = ChangelogTable::new();

        let state = ParserState::AwaitingHeading.advance("# `1.0.0`\n", &mut table);
        assert_eq!(
            state,
            ParserState::AwaitingContent {
                pending_version: "1.0.0".to_string()
            }
        );

        let state = state.advance("Initial release\n- first\n", &mut table);
        assert_eq!(state, ParserState::AwaitingHeading);
        assert_eq!(
            table.get("1.0.0"),
            Some(&ChangelogEntry {
                title: "Initial release".to_string(),
                content: "- first".to_string(),
            })
        );
    }

    #[test]
    fn malformed_heading_is_discarded() {
        let mut table = ChangelogTable::new();

        let state = ParserState::AwaitingHeading.advance("no backticks here", &mut table);

        assert_eq!(state, ParserState::AwaitingHeading);
        assert!(table.is_empty());
    }

    #[test]
    fn any_non_blank_segment_is_body_while_awaiting_content() {
        let mut table = ChangelogTable::new();
        let state = ParserState::AwaitingContent {
            pending_version: "2.0.0".to_string(),
        };

        let state = state.advance("# `1.0.0`\n", &mut table);

        assert_eq!(state, ParserState::AwaitingHeading);
        assert_eq!(table["2.0.0"].title, "# `1.0.0`");
        assert_eq!(table["2.0.0"].content, "");
    }
}
