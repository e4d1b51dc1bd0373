use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::Capability;

/// Result type for loader operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// The configuration lacks a capability the synthesizer needs.
    #[error("cannot describe '{component}': configuration is missing `{capability}`")]
    #[diagnostic(
        code(folio::configuration),
        help("set `{capability}` on the loader configuration")
    )]
    Configuration {
        component: PathBuf,
        capability: Capability,
    },

    /// Checking for the examples file failed for a reason other than absence.
    #[error("cannot check examples file '{path}' for '{component}'")]
    #[diagnostic(
        code(folio::resource_access),
        help("make sure the component directory is readable")
    )]
    ResourceAccess {
        component: PathBuf,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' does not name a component file")]
    #[diagnostic(code(folio::invalid_component_path))]
    InvalidComponentPath { path: PathBuf },

    #[error("malformed module request '{request}': {reason}")]
    #[diagnostic(code(folio::invalid_request))]
    InvalidRequest { request: String, reason: String },

    #[error("failed to scan components in '{root}'")]
    #[diagnostic(
        code(folio::discovery),
        help("check `styleguide.components` in folio.toml")
    )]
    Discovery {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl Error {
    pub(crate) fn invalid_request(request: &str, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidRequest {
            request: request.to_string(),
            reason: reason.into(),
        })
    }
}
