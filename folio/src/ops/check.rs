//! Check operation - manifest and component validation.

use folio_loader::{FileSystem, ModuleEmitter, Synthesizer};
use rayon::prelude::*;

use super::{ModuleClash, Project, error_message, module_clashes};
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Discovers the components and describes each of them without writing
/// anything, collecting every problem found.
pub fn check<F, E>(project: &Project, synthesizer: &Synthesizer<F, E>) -> CheckReport
where
    F: FileSystem + Sync,
    E: ModuleEmitter + Sync,
{
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let components = project.components().unwrap_or_else(|e| {
        errors.push(error_message(&e));
        Vec::new()
    });
    if components.is_empty() && errors.is_empty() {
        warnings.push(format!(
            "no components found in {}",
            project.components_dir().display()
        ));
    }

    if let Some(template) = &project.loader().default_example {
        if !template.is_file() {
            warnings.push(format!(
                "default example {} does not exist",
                template.display()
            ));
        }
    }

    errors.extend(
        module_clashes(project, &components)
            .iter()
            .map(ModuleClash::message),
    );

    let results: Vec<_> = components
        .par_iter()
        .map(|path| synthesizer.describe(path, project.loader()))
        .collect();

    let mut with_examples = 0;
    for result in results {
        match result {
            Ok(descriptor) if descriptor.has_own_examples() => with_examples += 1,
            Ok(_) => {}
            Err(e) => errors.push(error_message(&e)),
        }
    }

    CheckReport {
        config_path: project.path().to_path_buf(),
        title: project.manifest().styleguide.title.clone(),
        component_count: components.len(),
        with_examples,
        errors,
        warnings,
    }
}
