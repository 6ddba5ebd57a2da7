//! Comment re-emission.
//!
//! Comments are written at statement granularity. A comment before a
//! statement gets its own line; a comment inside a statement, or on the same
//! line after it, follows the statement on that line. Whatever is left when a
//! block or the file ends is flushed before the closing brace or at the end.

use super::Printer;
use strjoin_common::comments::{CommentRange, has_line_break};

impl<'a> Printer<'a> {
    /// Next unemitted comment, skipping comments inside text that was copied
    /// verbatim from the source.
    fn peek_comment(&mut self) -> Option<CommentRange> {
        while let Some(&comment) = self.comments.get(self.comment_emit_idx) {
            let copied = self
                .copied_spans
                .iter()
                .any(|span| span.start <= comment.pos && comment.end <= span.end);
            if !copied {
                return Some(comment);
            }
            self.comment_emit_idx += 1;
        }
        None
    }

    fn comment_text(&self, comment: &CommentRange) -> &'a str {
        self.source_text
            .map_or("", |text| comment.get_text(text))
    }

    /// Write every pending comment that ends at or before `pos`, one per line.
    pub(super) fn emit_leading_comments(&mut self, pos: u32) {
        while let Some(comment) = self.peek_comment() {
            if comment.end > pos {
                break;
            }
            self.comment_emit_idx += 1;
            let text = self.comment_text(&comment);
            self.write_indent();
            self.write(text);
            self.write_line();
        }
    }

    /// After a statement spanning `end`: write the comments it contains, then
    /// the comments that follow it on the same source line.
    pub(super) fn emit_trailing_comments(&mut self, end: u32) {
        let Some(source) = self.source_text else {
            return;
        };
        let mut from = end;
        while let Some(comment) = self.peek_comment() {
            if comment.pos >= end {
                let gap = source
                    .get(from as usize..comment.pos as usize)
                    .unwrap_or("\n");
                if has_line_break(gap) || !gap.trim().is_empty() {
                    break;
                }
                from = comment.end;
            } else if comment.end > end {
                break;
            }
            self.comment_emit_idx += 1;
            let text = self.comment_text(&comment);
            self.write_space();
            self.write(text);
            // A line comment ends the output line.
            if !comment.is_multi_line {
                break;
            }
        }
    }
}
