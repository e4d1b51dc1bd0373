//! CommonJS export statement builder.

use super::{JsArray, JsObject};
use crate::builder::{CodeFragment, Renderable};

/// `module.exports = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleExports {
    Object(JsObject),
    Array(JsArray),
    /// A raw expression such as `null` or `require("...")`.
    Expr(String),
}

impl ModuleExports {
    pub fn object(value: JsObject) -> Self {
        Self::Object(value)
    }

    pub fn array(value: JsArray) -> Self {
        Self::Array(value)
    }

    pub fn expr(value: impl Into<String>) -> Self {
        Self::Expr(value.into())
    }
}

impl Renderable for ModuleExports {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let value = match self {
            Self::Object(obj) => obj.to_fragments(),
            Self::Array(arr) => arr.to_fragments(),
            Self::Expr(expr) => vec![CodeFragment::Raw(expr.clone())],
        };

        value
            .into_iter()
            .map(|fragment| fragment.wrap("module.exports = ", ";"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodeBuilder;

    fn render(exports: &ModuleExports) -> String {
        let mut builder = CodeBuilder::javascript();
        builder.emit(exports);
        builder.build()
    }

    #[test]
    fn test_export_object() {
        let exports = ModuleExports::object(JsObject::new().string("name", "Button"));
        assert_eq!(render(&exports), "module.exports = {\n  name: \"Button\",\n};\n");
    }

    #[test]
    fn test_export_empty_object() {
        let exports = ModuleExports::object(JsObject::new());
        assert_eq!(render(&exports), "module.exports = {};\n");
    }

    #[test]
    fn test_export_array() {
        let exports = ModuleExports::array(JsArray::new().raw("require(\"./a\")"));
        assert_eq!(
            render(&exports),
            "module.exports = [\n  require(\"./a\"),\n];\n"
        );
    }

    #[test]
    fn test_export_expr() {
        assert_eq!(render(&ModuleExports::expr("null")), "module.exports = null;\n");
    }
}
