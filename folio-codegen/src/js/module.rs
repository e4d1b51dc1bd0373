//! Structured representation of a generated JavaScript module.

use crate::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A generated JavaScript module.
///
/// Organizes code into a leading comment header and body statements, with a
/// blank line between each section.
///
/// # Example
///
/// ```
/// use folio_codegen::{JsModule, JsObject, ModuleExports};
///
/// let source = JsModule::new()
///     .comment("Generated by folio. Do not edit.")
///     .add(ModuleExports::object(JsObject::new().string("name", "Button")))
///     .render();
///
/// assert!(source.starts_with("// Generated by folio. Do not edit.\n\nmodule.exports = {"));
/// ```
#[derive(Default)]
pub struct JsModule {
    header: Vec<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl JsModule {
    /// Create a new empty module.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `//` comment line to the header.
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.header.push(text.into());
        self
    }

    /// Add a body statement (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the module with 2-space indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::JAVASCRIPT)
    }

    /// Render the module with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        for line in &self.header {
            builder.push_line(&format!("// {line}"));
        }

        if !self.header.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Check if the module is empty.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{JsObject, ModuleExports};

    #[test]
    fn test_empty_module() {
        let module = JsModule::new();
        assert!(module.is_empty());
        assert_eq!(module.render(), "");
    }

    #[test]
    fn test_body_only() {
        let source = JsModule::new()
            .add(ModuleExports::object(JsObject::new().raw("a", "1")))
            .render();
        assert_eq!(source, "module.exports = {\n  a: 1,\n};\n");
    }

    #[test]
    fn test_header_and_body_separated_by_blank_line() {
        let source = JsModule::new()
            .comment("first")
            .comment("second")
            .add(ModuleExports::expr("null"))
            .render();
        assert_eq!(source, "// first\n// second\n\nmodule.exports = null;\n");
    }

    #[test]
    fn test_custom_indent() {
        let source = JsModule::new()
            .add(ModuleExports::object(JsObject::new().raw("a", "1")))
            .render_with_indent(Indent::Spaces(4));
        assert_eq!(source, "module.exports = {\n    a: 1,\n};\n");
    }
}
