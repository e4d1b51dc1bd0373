//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest and component validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Style guide title.
    pub title: String,
    /// Number of discovered components.
    pub component_count: usize,
    /// Number of components with their own examples file.
    pub with_examples: usize,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
            out.newline();
            out.preformatted(&format!("  {}", self.title));
            out.preformatted(&format!(
                "  {} component{}, {} with examples",
                self.component_count,
                if self.component_count == 1 { "" } else { "s" },
                self.with_examples
            ));
        }
    }
}
