//! Build command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a build.
#[derive(Debug)]
pub struct BuildReport {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Components left out because they have no examples of their own.
    pub skipped: Vec<PathBuf>,
    /// What happened to the generated modules.
    pub result: BuildResult,
}

/// Result of a build.
#[derive(Debug)]
pub enum BuildResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
    /// Some components could not be described; nothing was written.
    Failed(Vec<Failure>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Files written, relative to the output directory.
    pub written: Vec<PathBuf>,
    /// Number of files that already had identical content.
    pub unchanged: usize,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory.
    pub path: String,
    /// File content.
    pub content: String,
}

/// A component that could not be described.
#[derive(Debug)]
pub struct Failure {
    pub component: PathBuf,
    pub message: String,
}

impl BuildReport {
    pub fn has_failures(&self) -> bool {
        matches!(self.result, BuildResult::Failed(_))
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Generated", &self.output_dir.display().to_string());
        for path in &written.written {
            out.added_item(&path.display().to_string());
        }
        if written.unchanged > 0 {
            out.preformatted(&format!("  {} unchanged", written.unchanged));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }

    fn render_failed(&self, out: &mut dyn Output, failures: &[Failure]) {
        for failure in failures {
            out.error(&format!("{}: {}", failure.component.display(), failure.message));
        }
        out.newline();
        out.preformatted(&format!(
            "{} component{} failed; nothing was written",
            failures.len(),
            if failures.len() == 1 { "" } else { "s" }
        ));
    }
}

impl Report for BuildReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.skipped.is_empty() {
            out.section("Skipped (no examples)");
            for path in &self.skipped {
                out.list_item(&path.display().to_string());
            }
            out.newline();
        }

        match &self.result {
            BuildResult::Written(written) => self.render_written(out, written),
            BuildResult::Preview(preview) => self.render_preview(out, preview),
            BuildResult::Failed(failures) => self.render_failed(out, failures),
        }
    }
}
