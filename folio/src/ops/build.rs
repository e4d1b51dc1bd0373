//! Build operation - descriptor modules for every component.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use folio_core::{GeneratedFile, WriteResult, relative_to, to_slash};
use folio_loader::{ComponentDescriptor, FileSystem, ModuleEmitter, Synthesizer};
use rayon::prelude::*;
use tracing::{info, warn};

use super::{Project, error_message, module_clashes};
use crate::{
    files::{ComponentJs, ComponentsJs},
    reports::{BuildReport, BuildResult, Failure, PreviewFile, PreviewResult, WrittenResult},
};

/// Options for the build operation.
pub struct BuildOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the build operation.
///
/// Every component is described in parallel first. If any of them fails,
/// or two of them would generate the same module, all failures are
/// reported and nothing is written.
pub fn build<F, E>(
    project: &Project,
    synthesizer: &Synthesizer<F, E>,
    components: &[PathBuf],
    opts: BuildOptions,
) -> Result<BuildReport>
where
    F: FileSystem + Sync,
    E: ModuleEmitter + Sync,
{
    let output_dir = project.output_dir();

    let results: Vec<_> = components
        .par_iter()
        .map(|path| {
            synthesizer
                .describe(path, project.loader())
                .map_err(|e| Failure {
                    component: path.clone(),
                    message: error_message(&e),
                })
        })
        .collect();

    let mut descriptors = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(descriptor) => descriptors.push(descriptor),
            Err(failure) => failures.push(failure),
        }
    }
    failures.extend(
        module_clashes(project, components)
            .into_iter()
            .map(|clash| Failure {
                message: clash.message(),
                component: clash.second,
            }),
    );

    if !failures.is_empty() {
        return Ok(BuildReport {
            output_dir,
            skipped: Vec::new(),
            result: BuildResult::Failed(failures),
        });
    }

    let (descriptors, skipped) = partition_skipped(project, descriptors);
    let components_dir = project.components_dir();
    let modules: Vec<ComponentJs> = descriptors
        .iter()
        .map(|descriptor| {
            ComponentJs::new(
                &relative_to(&descriptor.filepath, &components_dir),
                synthesizer.render(descriptor),
            )
        })
        .collect();
    let index = ComponentsJs::new(modules.iter().map(ComponentJs::relative_path).collect());

    let result = if opts.dry_run {
        let mut files: Vec<PreviewFile> = modules
            .iter()
            .map(|module| preview(module, &output_dir))
            .collect();
        files.push(preview(&index, &output_dir));
        BuildResult::Preview(PreviewResult { files })
    } else {
        let mut written = Vec::new();
        let mut unchanged = 0;
        let files = modules
            .iter()
            .map(|m| m as &dyn GeneratedFile)
            .chain(std::iter::once(&index as &dyn GeneratedFile));
        for file in files {
            let path = file.path(&output_dir);
            match file
                .write(&output_dir)
                .wrap_err("Failed to write generated modules")?
            {
                WriteResult::Written => written.push(relative_to(&path, &output_dir)),
                WriteResult::Unchanged => unchanged += 1,
            }
        }
        info!(
            written = written.len(),
            unchanged,
            output = %output_dir.display(),
            "build finished"
        );
        BuildResult::Written(WrittenResult { written, unchanged })
    };

    Ok(BuildReport {
        output_dir,
        skipped,
        result,
    })
}

/// Split off components without their own examples when the project asks
/// for them to be left out.
fn partition_skipped(
    project: &Project,
    descriptors: Vec<ComponentDescriptor>,
) -> (Vec<ComponentDescriptor>, Vec<PathBuf>) {
    if !project.manifest().styleguide.skip_components_without_example {
        return (descriptors, Vec::new());
    }

    let (kept, skipped): (Vec<_>, Vec<_>) = descriptors
        .into_iter()
        .partition(ComponentDescriptor::has_own_examples);
    let skipped = skipped
        .into_iter()
        .map(|descriptor| {
            warn!(component = %descriptor.filepath.display(), "skipping component without examples");
            descriptor.filepath
        })
        .collect();
    (kept, skipped)
}

fn preview(file: &dyn GeneratedFile, output_dir: &Path) -> PreviewFile {
    PreviewFile {
        path: to_slash(&relative_to(&file.path(output_dir), output_dir)),
        content: file.render(),
    }
}
