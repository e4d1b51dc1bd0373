use serde::Deserialize;

use crate::Pattern;

/// Placeholders accepted by `conventions.example_filename`.
pub const EXAMPLE_FILENAME_PLACEHOLDERS: &[&str] = &["dir", "stem", "name"];

/// Placeholders accepted by `conventions.path_line`.
pub const PATH_LINE_PLACEHOLDERS: &[&str] = &["path", "dir", "stem", "name"];

/// Naming conventions used to locate examples and describe components.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Conventions {
    /// Where a component's examples file lives.
    ///
    /// `{dir}` is the component's directory, `{stem}` its file name without
    /// extension and `{name}` the component name (the parent directory for
    /// `index` files). Relative results are resolved against the directory of
    /// folio.toml.
    #[serde(default = "default_example_filename")]
    pub example_filename: Pattern,

    /// Display line shown under each component.
    ///
    /// `{path}` and `{dir}` are relative to the directory of folio.toml.
    #[serde(default = "default_path_line")]
    pub path_line: Pattern,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            example_filename: default_example_filename(),
            path_line: default_path_line(),
        }
    }
}

fn default_example_filename() -> Pattern {
    Pattern::placeholder("dir", "/Readme.md")
}

fn default_path_line() -> Pattern {
    Pattern::placeholder("path", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let conventions = Conventions::default();
        assert_eq!(conventions.example_filename.as_str(), "{dir}/Readme.md");
        assert_eq!(conventions.path_line.as_str(), "{path}");
    }

    #[test]
    fn test_default_placeholders_are_allowed() {
        let conventions = Conventions::default();
        assert!(
            conventions
                .example_filename
                .placeholders()
                .all(|p| EXAMPLE_FILENAME_PLACEHOLDERS.contains(&p))
        );
        assert!(
            conventions
                .path_line
                .placeholders()
                .all(|p| PATH_LINE_PLACEHOLDERS.contains(&p))
        );
    }
}
