//! Comment Preservation
//!
//! Comments are not part of the AST. The scanner records their ranges while
//! skipping trivia, the parser stores them on the source file, and the
//! printer writes them back around the statements they belong to.

use serde::Serialize;

/// A comment in the source text, delimiters included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CommentRange {
    /// Start position (byte offset)
    pub pos: u32,
    /// End position (byte offset)
    pub end: u32,
    /// `/* ... */` rather than `// ...`
    pub is_multi_line: bool,
}

impl CommentRange {
    pub fn new(pos: u32, end: u32, is_multi_line: bool) -> Self {
        CommentRange {
            pos,
            end,
            is_multi_line,
        }
    }

    /// Get the comment text from source.
    pub fn get_text<'a>(&self, source: &'a str) -> &'a str {
        source
            .get(self.pos as usize..self.end as usize)
            .unwrap_or("")
    }
}

/// Whether `text` contains a line terminator.
pub fn has_line_break(text: &str) -> bool {
    text.contains(['\n', '\r', '\u{2028}', '\u{2029}'])
}
