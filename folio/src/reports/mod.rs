//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod build;
mod check;
mod list;
mod output;

pub use build::{BuildReport, BuildResult, Failure, PreviewFile, PreviewResult, WrittenResult};
pub use check::CheckReport;
pub use list::{ComponentEntry, ExamplesSource, ListReport};
pub use output::{Report, TerminalOutput};
