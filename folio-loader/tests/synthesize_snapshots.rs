//! Snapshot tests for descriptor module synthesis.
//!
//! Components live under a fixed `/repo` root backed by an in-memory
//! filesystem so the generated paths are stable.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::{
    collections::HashSet,
    io,
    path::{Path, PathBuf},
    str::FromStr,
};

use folio_loader::{FileSystem, LoaderConfig, Synthesizer};
use folio_manifest::Manifest;

struct MemoryFs(HashSet<PathBuf>);

impl MemoryFs {
    fn new(files: &[&str]) -> Self {
        Self(files.iter().map(PathBuf::from).collect())
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        Ok(self.0.contains(path))
    }
}

/// Synthesize `component` with a config built from `manifest`, rooted at `/repo`.
fn synthesize(manifest: &str, files: &[&str], component: &str) -> String {
    let manifest = Manifest::from_str(manifest).expect("Failed to parse manifest");
    let config = LoaderConfig::from_manifest(&manifest, Path::new("/repo"));
    Synthesizer::new()
        .with_fs(MemoryFs::new(files))
        .synthesize(Path::new(component), &config)
        .expect("Synthesis failed")
}

#[test]
fn test_component_without_examples() {
    let source = synthesize("", &[], "/repo/src/Button/Button.js");
    insta::assert_snapshot!("button_without_examples", source);
}

#[test]
fn test_index_component_with_examples_file() {
    let source = synthesize(
        r#"
        [conventions]
        example_filename = "{dir}/{name}.examples.md"
        "#,
        &["/repo/src/Modal/Modal.examples.md"],
        "/repo/src/Modal/index.js",
    );
    insta::assert_snapshot!("modal_index_with_examples", source);
}

#[test]
fn test_default_example() {
    let source = synthesize(
        r#"
        [styleguide]
        default_example = "docs/default.md"
        "#,
        &[],
        "/repo/src/Button/Button.js",
    );
    insta::assert_snapshot!("button_default_example", source);
}

#[test]
fn test_custom_path_line() {
    let source = synthesize(
        r#"
        [conventions]
        path_line = "import {name} from '{dir}';"
        "#,
        &["/repo/src/Card/Readme.md"],
        "/repo/src/Card/index.jsx",
    );
    insta::assert_snapshot!("card_custom_path_line", source);
}
