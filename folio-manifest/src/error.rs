use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(folio::io),
        help("create a folio.toml next to your package.json or pass --config")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse folio.toml")]
    #[diagnostic(code(folio::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown placeholder '{{{placeholder}}}' in '{key}'")]
    #[diagnostic(
        code(folio::unknown_placeholder),
        help("placeholders available in '{key}' are: {allowed}")
    )]
    UnknownPlaceholder {
        #[source_code]
        src: NamedSource<String>,
        #[label("used here")]
        span: Option<SourceSpan>,
        placeholder: String,
        key: String,
        allowed: String,
    },

    #[error("{message}")]
    #[diagnostic(code(folio::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error with source context
    pub fn validation(
        message: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }

    /// Create an unknown placeholder error
    pub fn unknown_placeholder(
        placeholder: impl Into<String>,
        key: impl Into<String>,
        allowed: &[&str],
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        let allowed = allowed
            .iter()
            .map(|name| format!("{{{name}}}"))
            .collect::<Vec<_>>()
            .join(", ");
        Box::new(Error::UnknownPlaceholder {
            src: NamedSource::new(filename, src.to_string()),
            span,
            placeholder: placeholder.into(),
            key: key.into(),
            allowed,
        })
    }
}
