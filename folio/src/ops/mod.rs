//! Core operations.
//!
//! This module contains the business logic for folio commands,
//! separated from CLI argument parsing and output rendering.

pub mod build;
pub mod check;
pub mod list;
mod project;
pub mod synth;

pub use build::{BuildOptions, build};
pub use check::check;
pub use list::list;
pub use project::Project;
pub use synth::synth;

use std::{
    collections::{HashMap, hash_map::Entry},
    path::PathBuf,
};

use folio_core::{relative_to, to_slash};

use crate::files::ComponentJs;

/// One-line message for a loader error followed by its causes.
pub(crate) fn error_message(err: &folio_loader::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Two components whose generated modules would land on the same path.
pub(crate) struct ModuleClash {
    pub module: PathBuf,
    pub first: PathBuf,
    pub second: PathBuf,
}

impl ModuleClash {
    pub fn message(&self) -> String {
        format!(
            "'{}' and '{}' would both generate components/{}",
            self.first.display(),
            self.second.display(),
            to_slash(&self.module)
        )
    }
}

/// Find components that map to an already taken module path.
pub(crate) fn module_clashes(project: &Project, components: &[PathBuf]) -> Vec<ModuleClash> {
    let components_dir = project.components_dir();
    let mut taken: HashMap<PathBuf, &PathBuf> = HashMap::new();
    let mut clashes = Vec::new();

    for component in components {
        let module = ComponentJs::module_path(&relative_to(component, &components_dir));
        match taken.entry(module) {
            Entry::Occupied(entry) => clashes.push(ModuleClash {
                module: entry.key().clone(),
                first: (*entry.get()).clone(),
                second: component.clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(component);
            }
        }
    }
    clashes
}
