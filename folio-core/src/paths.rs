//! Path helpers shared by the manifest, the loader and the CLI.

use std::path::{Component, Path, PathBuf};

/// Name used for a component when its runtime name can't be introspected.
///
/// This is the file name without extension, or the parent directory name
/// when the file is called `index` (e.g. `Modal/index.js` -> `Modal`).
/// Returns `None` for paths without a file name such as `/` or `..`.
pub fn name_fallback(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy();
    if stem != "index" {
        return Some(stem.into_owned());
    }

    let parent = path
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned());

    Some(parent.unwrap_or_else(|| stem.into_owned()))
}

/// Compute `path` relative to `base`, inserting `..` where `path` lies
/// outside of `base`.
///
/// Both paths are expected to share the same anchor (both absolute or both
/// relative). When they don't, only the file name of `path` is kept so that
/// no absolute layout leaks into the result.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    if path.has_root() != base.has_root() || prefix(path) != prefix(base) {
        return path.file_name().map(PathBuf::from).unwrap_or_default();
    }

    let path_parts: Vec<Component<'_>> = normalized(path);
    let base_parts: Vec<Component<'_>> = normalized(base);

    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in &path_parts[common..] {
        relative.push(part.as_os_str());
    }
    relative
}

/// Render a path with `/` separators regardless of the host platform.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::RootDir => Some(String::new()),
            Component::CurDir => None,
            other => Some(other.as_os_str().to_string_lossy().into_owned()),
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn prefix(path: &Path) -> Option<Component<'_>> {
    path.components()
        .next()
        .filter(|c| matches!(c, Component::Prefix(_)))
}

fn normalized(path: &Path) -> Vec<Component<'_>> {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_fallback_uses_file_stem() {
        let path = Path::new("/repo/src/Button/Button.js");
        assert_eq!(name_fallback(path).as_deref(), Some("Button"));
    }

    #[test]
    fn test_name_fallback_index_uses_parent_dir() {
        let path = Path::new("/repo/src/Modal/index.js");
        assert_eq!(name_fallback(path).as_deref(), Some("Modal"));
    }

    #[test]
    fn test_name_fallback_only_strips_last_extension() {
        let path = Path::new("/repo/src/Card/Card.stories.tsx");
        assert_eq!(name_fallback(path).as_deref(), Some("Card.stories"));
    }

    #[test]
    fn test_name_fallback_index_like_names_are_kept() {
        let path = Path::new("/repo/src/Table/indexed.js");
        assert_eq!(name_fallback(path).as_deref(), Some("indexed"));
    }

    #[test]
    fn test_name_fallback_index_at_root() {
        assert_eq!(name_fallback(Path::new("/index.js")).as_deref(), Some("index"));
        assert_eq!(name_fallback(Path::new("index.js")).as_deref(), Some("index"));
    }

    #[test]
    fn test_name_fallback_without_file_name() {
        assert_eq!(name_fallback(Path::new("/")), None);
        assert_eq!(name_fallback(Path::new("..")), None);
    }

    #[test]
    fn test_relative_to_inside_base() {
        let rel = relative_to(
            Path::new("/repo/src/Button/Button.js"),
            Path::new("/repo"),
        );
        assert_eq!(rel, PathBuf::from("src/Button/Button.js"));
    }

    #[test]
    fn test_relative_to_outside_base() {
        let rel = relative_to(
            Path::new("/repo/lib/Button.js"),
            Path::new("/repo/docs/config"),
        );
        assert_eq!(rel, PathBuf::from("../../lib/Button.js"));
    }

    #[test]
    fn test_relative_to_ignores_cur_dir() {
        let rel = relative_to(Path::new("/repo/./src/A.js"), Path::new("/repo/."));
        assert_eq!(rel, PathBuf::from("src/A.js"));
    }

    #[test]
    fn test_relative_to_mixed_anchors_keeps_file_name() {
        let rel = relative_to(Path::new("/repo/src/A.js"), Path::new("repo"));
        assert_eq!(rel, PathBuf::from("A.js"));
    }

    #[test]
    fn test_relative_to_same_path() {
        let rel = relative_to(Path::new("/repo"), Path::new("/repo"));
        assert_eq!(rel, PathBuf::new());
    }

    #[test]
    fn test_to_slash() {
        assert_eq!(to_slash(Path::new("src/Button/Button.js")), "src/Button/Button.js");
        assert_eq!(to_slash(Path::new("./src/A.js")), "src/A.js");
        assert_eq!(to_slash(Path::new("/repo/A.js")), "/repo/A.js");
        assert_eq!(to_slash(Path::new("../lib/A.js")), "../lib/A.js");
    }
}
