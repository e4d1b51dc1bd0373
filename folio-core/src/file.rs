use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// How an existing file at the same path is treated
    fn overwrite(&self) -> Overwrite {
        Overwrite::Always
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        write_with(&self.path(base), &self.render(), self.overwrite())
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content and was left untouched
    Unchanged,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite
    #[default]
    Always,
    /// Only write when the content differs, so file watchers aren't
    /// triggered by identical rebuilds
    IfChanged,
}

fn write_with(path: &Path, content: &str, overwrite: Overwrite) -> Result<WriteResult> {
    if overwrite == Overwrite::IfChanged {
        match std::fs::read_to_string(path) {
            Ok(existing) if existing == content => return Ok(WriteResult::Unchanged),
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e).wrap_err_with(|| format!("failed to read {}", path.display()));
            }
        }
    }

    write_file(path, content)?;
    Ok(WriteResult::Written)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
