use std::fmt::Write;

use super::Printer;
use strjoin_parser::parser::node::Node;

impl<'a> Printer<'a> {
    // =========================================================================
    // Literals
    // =========================================================================

    pub(super) fn emit_identifier(&mut self, node: &Node) {
        if let Some(ident) = self.arena.get_identifier(node) {
            self.write(&ident.escaped_text);
        }
    }

    pub(super) fn emit_numeric_literal(&mut self, node: &Node) {
        if let Some(lit) = self.arena.get_literal(node) {
            self.write(&lit.text);
        }
    }

    pub(super) fn emit_string_literal(&mut self, node: &Node) {
        // Untouched literals keep their original quotes and escapes.
        if let Some(raw) = self.source_range_text(node)
            && raw.starts_with(['"', '\''])
        {
            self.write(raw);
            return;
        }
        if let Some(lit) = self.arena.get_literal(node) {
            let quote = if self.options.single_quote { '\'' } else { '"' };
            self.write_char(quote);
            self.emit_escaped_string(&lit.text, quote);
            self.write_char(quote);
        }
    }

    pub(super) fn emit_escaped_string(&mut self, s: &str, quote_char: char) {
        let mut chars = s.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\n' => self.write("\\n"),
                '\r' => self.write("\\r"),
                '\t' => self.write("\\t"),
                '\\' => self.write("\\\\"),
                // `\0` followed by a digit would read as a legacy octal escape.
                '\0' if chars.peek().is_some_and(char::is_ascii_digit) => self.write("\\x00"),
                '\0' => self.write("\\0"),
                '\u{2028}' => self.write("\\u2028"),
                '\u{2029}' => self.write("\\u2029"),
                c if c == quote_char => {
                    self.write_char('\\');
                    self.write_char(c);
                }
                c if (c as u32) < 0x20 || c == '\x7F' => {
                    let mut buf = String::new();
                    let _ = write!(buf, "\\u{:04X}", c as u32);
                    self.write(&buf);
                }
                c => self.write_char(c),
            }
        }
    }

    // =========================================================================
    // Templates
    // =========================================================================

    /// Templates are always printed from the raw channel of their quasis.
    pub(super) fn emit_template_expression(&mut self, node: &Node) {
        let Some(template) = self.arena.get_template(node) else {
            return;
        };
        self.write_char('`');
        for (i, quasi) in template.quasis.iter().enumerate() {
            // Quasi source ranges include the delimiters, so never copy them.
            if let Some(element) = self.arena.get(quasi) {
                self.emit_template_element(element);
            }
            if let Some(expr) = template.expressions.nodes.get(i) {
                self.write("${");
                self.emit_node(*expr);
                self.write_char('}');
            }
        }
        self.write_char('`');
    }

    pub(super) fn emit_template_element(&mut self, node: &Node) {
        if let Some(element) = self.arena.get_template_element(node) {
            self.write(element.value.raw());
        }
    }

    pub(super) fn emit_tagged_template(&mut self, node: &Node) {
        if let Some(tagged) = self.arena.get_tagged_template(node) {
            self.emit_node(tagged.tag);
            self.emit_node(tagged.template);
        }
    }
}
