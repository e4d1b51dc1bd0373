//! Core utilities and types for the folio style guide generator.
//!
//! This crate provides the path helpers and file writing primitives used
//! across the folio ecosystem.

mod file;
mod paths;

// File operations
pub use file::{GeneratedFile, Overwrite, WriteResult};
// Path utilities
pub use paths::{name_fallback, relative_to, to_slash};
