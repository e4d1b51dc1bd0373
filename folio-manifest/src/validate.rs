//! Validation helpers that carry the TOML source for error reporting.

use miette::SourceSpan;

use crate::{Error, Pattern, Result};

/// Parsing and validation context that carries source information.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "folio.toml").push("conventions");
/// ctx.validate_pattern(&pattern, "path_line", PATH_LINE_PLACEHOLDERS)?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// The raw TOML source content
    src: &'a str,
    /// The filename for error reporting
    filename: &'a str,
    /// Table path (e.g., ["conventions"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self {
            src,
            filename,
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &'a str {
        self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &'a str {
        self.filename
    }

    /// Push a table segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            src: self.src,
            filename: self.filename,
            path,
        }
    }

    /// Dotted key for error messages, e.g. `conventions.path_line`.
    pub fn key_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path.join("."), key)
        }
    }

    /// Find the span of the value assigned to `key`.
    pub fn find_span(&self, key: &str) -> Option<SourceSpan> {
        find_value_span(self.src, key)
    }

    /// Create a validation error pointing at the value of `key`.
    pub fn error_at(&self, key: &str, message: impl Into<String>) -> Box<Error> {
        Error::validation(message, self.src, self.filename, self.find_span(key))
    }

    /// Check that a pattern only uses the given placeholders.
    pub fn validate_pattern(&self, pattern: &Pattern, key: &str, allowed: &[&str]) -> Result<()> {
        match pattern.placeholders().find(|p| !allowed.contains(p)) {
            Some(unknown) => Err(Error::unknown_placeholder(
                unknown,
                self.key_path(key),
                allowed,
                self.src,
                self.filename,
                find_placeholder_span(self.src, key, unknown).or_else(|| self.find_span(key)),
            )),
            None => Ok(()),
        }
    }
}

/// Find the span of the value in a `key = value` line
pub(crate) fn find_value_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();

        if let Some(rest) = trimmed.strip_prefix(key) {
            let after_key = rest.trim_start();
            if let Some(raw_value) = after_key.strip_prefix('=') {
                let value = raw_value.trim();
                if value.is_empty() {
                    return Some(SourceSpan::from((offset + indent, key.len())));
                }
                let leading = raw_value.len() - raw_value.trim_start().len();
                let start = line.len() - raw_value.len() + leading;
                return Some(SourceSpan::from((offset + start, value.len())));
            }
        }

        offset += line.len();
    }
    None
}

/// Narrow a value span down to a `{placeholder}` inside it
fn find_placeholder_span(src: &str, key: &str, placeholder: &str) -> Option<SourceSpan> {
    let value = find_value_span(src, key)?;
    let start = value.offset();
    let text = src.get(start..start + value.len())?;
    let needle = format!("{{{placeholder}}}");
    text.find(&needle)
        .map(|pos| SourceSpan::from((start + pos, needle.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRC: &str = "[conventions]\nexample_filename = \"{dir}/{comp}.md\"\npath_line=\"{path}\"\n";

    #[test]
    fn test_find_value_span() {
        let span = find_value_span(SRC, "example_filename").unwrap();
        assert_eq!(
            &SRC[span.offset()..span.offset() + span.len()],
            "\"{dir}/{comp}.md\""
        );
    }

    #[test]
    fn test_find_value_span_without_spaces() {
        let span = find_value_span(SRC, "path_line").unwrap();
        assert_eq!(&SRC[span.offset()..span.offset() + span.len()], "\"{path}\"");
    }

    #[test]
    fn test_find_value_span_missing_key() {
        assert!(find_value_span(SRC, "title").is_none());
    }

    #[test]
    fn test_key_prefix_does_not_match_longer_key() {
        let src = "path_line_extra = 1\npath_line = \"x\"\n";
        let span = find_value_span(src, "path_line").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "\"x\"");
    }

    #[test]
    fn test_validate_pattern_reports_placeholder_span() {
        let ctx = ParseContext::new(SRC, "folio.toml").push("conventions");
        let pattern = Pattern::parse("{dir}/{comp}.md").unwrap();

        let err = ctx
            .validate_pattern(&pattern, "example_filename", &["dir", "stem", "name"])
            .unwrap_err();

        match *err {
            Error::UnknownPlaceholder {
                placeholder,
                key,
                allowed,
                span,
                ..
            } => {
                assert_eq!(placeholder, "comp");
                assert_eq!(key, "conventions.example_filename");
                assert_eq!(allowed, "{dir}, {stem}, {name}");
                let span = span.unwrap();
                assert_eq!(&SRC[span.offset()..span.offset() + span.len()], "{comp}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_pattern_accepts_known_placeholders() {
        let ctx = ParseContext::new(SRC, "folio.toml");
        let pattern = Pattern::parse("{path}").unwrap();
        assert!(ctx.validate_pattern(&pattern, "path_line", &["path"]).is_ok());
    }
}
