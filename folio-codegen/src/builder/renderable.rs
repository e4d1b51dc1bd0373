//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes describe themselves as fragments; the [`CodeBuilder`](super::CodeBuilder)
//! turns fragments into indented text.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// Raw text without newline.
    Raw(String),
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// Surround the fragment with text, e.g. turn `{ ... }` into
    /// `module.exports = { ... };`.
    ///
    /// For blocks the prefix goes before the header and the suffix after the
    /// closing line. Single-line fragments become a full line.
    pub fn wrap(self, prefix: &str, suffix: &str) -> Self {
        match self {
            Self::Block {
                header,
                body,
                close,
            } => Self::Block {
                header: format!("{prefix}{header}"),
                body,
                close: Some(format!("{}{suffix}", close.unwrap_or_default())),
            },
            Self::Line(s) | Self::Raw(s) => Self::Line(format!("{prefix}{s}{suffix}")),
            Self::Blank => Self::Line(format!("{prefix}{suffix}")),
        }
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_block() {
        let block = CodeFragment::block("{", vec![CodeFragment::line("a: 1,")], Some("}".into()));
        assert_eq!(
            block.wrap("module.exports = ", ";"),
            CodeFragment::block(
                "module.exports = {",
                vec![CodeFragment::line("a: 1,")],
                Some("};".into())
            )
        );
    }

    #[test]
    fn test_wrap_raw() {
        let raw = CodeFragment::Raw("{}".into());
        assert_eq!(
            raw.wrap("module.exports = ", ";"),
            CodeFragment::line("module.exports = {};")
        );
    }
}
