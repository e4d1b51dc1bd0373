//! Synth operation - descriptor module for a single component.

use std::path::Path;

use folio_loader::{FileSystem, ModuleEmitter, Result, Synthesizer};

use super::Project;

/// Synthesize the descriptor module for `component` with the project's conventions.
pub fn synth<F: FileSystem, E: ModuleEmitter>(
    project: &Project,
    synthesizer: &Synthesizer<F, E>,
    component: &Path,
) -> Result<String> {
    synthesizer.synthesize(component, project.loader())
}
