use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::{Error, Result};

/// Find component files under `root`.
///
/// A file is a component when its extension is one of `extensions` (given
/// without the leading dot). Hidden entries, `node_modules` and anything
/// whose file name appears in `ignore` are skipped along with their
/// contents. Results are sorted so builds are reproducible.
pub fn discover(root: &Path, extensions: &[String], ignore: &[String]) -> Result<Vec<PathBuf>> {
    let mut components = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped(e, ignore))
    {
        let entry = entry.map_err(|source| {
            Box::new(Error::Discovery {
                root: root.to_path_buf(),
                source,
            })
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.iter().any(|e| e == ext));
        if matches {
            components.push(entry.into_path());
        }
    }

    components.sort();
    debug!(root = %root.display(), count = components.len(), "discovered components");
    Ok(components)
}

fn is_skipped(entry: &DirEntry, ignore: &[String]) -> bool {
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name == "node_modules" || ignore.iter().any(|i| *i == name)
}
