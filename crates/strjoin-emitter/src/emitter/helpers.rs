use super::Printer;
use strjoin_parser::parser::node::Node;

impl<'a> Printer<'a> {
    pub(super) fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub(super) fn write_char(&mut self, ch: char) {
        self.output.push(ch);
    }

    pub(super) fn write_space(&mut self) {
        self.output.push(' ');
    }

    pub(super) fn write_line(&mut self) {
        self.output.push('\n');
    }

    pub(super) fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(self.indent_str);
        }
    }

    pub(super) const fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub(super) const fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Copy the node's original text. Returns `false` when the node has no
    /// usable source range.
    pub(super) fn write_source_range(&mut self, node: &Node) -> bool {
        let Some(text) = self.source_range_text(node) else {
            return false;
        };
        self.output.push_str(text);
        self.copied_spans.push(node.span());
        true
    }

    pub(super) fn source_range_text(&self, node: &Node) -> Option<&'a str> {
        if !Self::is_source_backed(node) {
            return None;
        }
        let text = self.source_text?;
        let span = node.span();
        if span.is_empty() {
            return None;
        }
        text.get(span.start as usize..span.end as usize)
    }
}
