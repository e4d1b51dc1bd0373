//! `folio.toml` parsing and validation.
//!
//! The manifest describes where components live, where generated modules go,
//! and the naming conventions used to locate examples and display component
//! paths.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod conventions;
mod error;
mod file;
mod manifest;
mod pattern;
mod styleguide;
mod validate;

pub use conventions::{Conventions, EXAMPLE_FILENAME_PLACEHOLDERS, PATH_LINE_PLACEHOLDERS};
pub use error::{Error, Result};
pub use file::FolioToml;
pub use manifest::Manifest;
pub use pattern::{Pattern, PatternError};
pub use styleguide::StyleguideConfig;
pub use validate::ParseContext;
