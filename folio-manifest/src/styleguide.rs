use std::path::{Path, PathBuf};

use serde::Deserialize;

/// `[styleguide]` section of folio.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleguideConfig {
    /// Style guide title
    #[serde(default = "default_title")]
    pub title: String,

    /// Directory scanned for components, relative to folio.toml
    #[serde(default = "default_components")]
    pub components: PathBuf,

    /// File extensions (without dot) that count as component sources
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// File and directory names skipped during discovery
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Directory for generated modules, relative to folio.toml
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Examples template used for components without an examples file
    pub default_example: Option<PathBuf>,

    /// Leave out components that have no examples file of their own
    #[serde(default)]
    pub skip_components_without_example: bool,
}

impl Default for StyleguideConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            components: default_components(),
            extensions: default_extensions(),
            ignore: Vec::new(),
            output: default_output(),
            default_example: None,
            skip_components_without_example: false,
        }
    }
}

impl StyleguideConfig {
    /// Absolute components directory.
    pub fn components_dir(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.components)
    }

    /// Absolute output directory.
    pub fn output_dir(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.output)
    }

    /// Default examples template resolved against the config directory.
    pub fn default_example_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.default_example
            .as_ref()
            .map(|path| config_dir.join(path))
    }
}

fn default_title() -> String {
    "Style Guide".to_string()
}

fn default_components() -> PathBuf {
    PathBuf::from("src/components")
}

fn default_extensions() -> Vec<String> {
    vec!["js".to_string(), "jsx".to_string()]
}

fn default_output() -> PathBuf {
    PathBuf::from("styleguide")
}
