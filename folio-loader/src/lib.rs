//! Component descriptor synthesis.
//!
//! Given a component source file and a [`LoaderConfig`], the loader produces
//! the text of a virtual CommonJS module describing the component: its path,
//! a fallback display name, a path line, and module references to the
//! implementation, its prop metadata and its usage examples. A bundler
//! evaluates that module to assemble the style guide page.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use folio_loader::{LoaderConfig, synthesize};
//!
//! let config = LoaderConfig::new()
//!     .config_dir("/repo")
//!     .example_filename(|path| path.with_extension("md"))
//!     .component_path_line(|path| path.display().to_string());
//!
//! let source = synthesize(Path::new("/repo/src/Button/Button.js"), &config)?;
//! assert!(source.starts_with("module.exports = {"));
//! # Ok::<(), Box<folio_loader::Error>>(())
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod descriptor;
mod discover;
mod emitter;
mod error;
mod fs;
mod request;
mod synthesizer;

pub use config::{Capability, ExampleFilenameFn, LoaderConfig, PathLineFn};
pub use descriptor::ComponentDescriptor;
pub use discover::discover;
pub use emitter::{CommonJs, ModuleEmitter};
pub use error::{Error, Result};
pub use fs::{FileSystem, OsFileSystem};
pub use request::{ModuleRequest, RequestKind};
pub use synthesizer::{Synthesizer, load, synthesize};
