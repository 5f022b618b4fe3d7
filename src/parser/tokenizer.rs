//! Heading tokenizer
//!
//! Splits a changelog into heading lines and the text between them, keeping
//! both in document order.
//!
//! A heading is a level-1 heading whose whole text is one backtick-quoted
//! token, terminated by a newline:
//!
//! ```text
//! # `1.2.0`
//! ```

use regex::Regex;

/// A piece of the document produced by [`HeadingTokenizer::segments`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A full heading line, including its trailing newline
    Heading(&'a str),
    /// Text between two headings (may be empty or blank)
    Text(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Segment::Heading(s) | Segment::Text(s) => s,
        }
    }
}

/// Tokenizer for version headings
pub struct HeadingTokenizer {
    /// Regex for a heading line: "# `<token>`\n"
    heading_re: Regex,
}

impl HeadingTokenizer {
    pub fn new() -> Self {
        Self {
            heading_re: Regex::new(r"(?m)^# `[^`]+`\n").expect("heading pattern is valid"),
        }
    }

    /// Split `text` into alternating text and heading segments.
    ///
    /// The result always starts and ends with a `Text` segment, and headings
    /// are always separated by a `Text` segment (empty when two headings are
    /// adjacent).
    pub fn segments<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut last_end = 0;

        for m in self.heading_re.find_iter(text) {
            segments.push(Segment::Text(&text[last_end..m.start()]));
            segments.push(Segment::Heading(m.as_str()));
            last_end = m.end();
        }
        segments.push(Segment::Text(&text[last_end..]));

        segments
    }
}

impl Default for HeadingTokenizer {
    fn default() -> Self {
        Self::new()
    }
}
