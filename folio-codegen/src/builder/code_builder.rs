//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use folio_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::javascript();
/// builder
///     .push_line("function render() {")
///     .push_indent()
///     .push_line("return null;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "function render() {\n  return null;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn javascript() -> Self {
        Self::new(Indent::JAVASCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Raw(s) => {
                self.push_raw(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
        }
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::javascript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::javascript();
        builder.push_line("const x = 1;");
        assert_eq!(builder.build(), "const x = 1;\n");
    }

    #[test]
    fn test_blank_line() {
        let mut builder = CodeBuilder::javascript();
        builder
            .push_line("'use strict';")
            .push_blank()
            .push_line("module.exports = null;");
        assert_eq!(builder.build(), "'use strict';\n\nmodule.exports = null;\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::javascript();
        builder.push_dedent().push_dedent();
        assert_eq!(builder.current_indent(), 0);
    }

    #[test]
    fn test_nested_blocks() {
        let fragment = CodeFragment::block(
            "a: {",
            vec![CodeFragment::block(
                "b: {",
                vec![CodeFragment::line("c: 1,")],
                Some("},".into()),
            )],
            Some("},".into()),
        );

        let mut builder = CodeBuilder::javascript();
        builder.apply_fragment(fragment);

        assert_eq!(builder.build(), "a: {\n  b: {\n    c: 1,\n  },\n},\n");
    }

    #[test]
    fn test_tab_indent() {
        let mut builder = CodeBuilder::new(Indent::Tab);
        builder.apply_fragment(CodeFragment::block(
            "{",
            vec![CodeFragment::line("x,")],
            Some("}".into()),
        ));
        assert_eq!(builder.build(), "{\n\tx,\n}\n");
    }
}
