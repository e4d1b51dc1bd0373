use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use folio_core::{name_fallback, to_slash};
use folio_manifest::Manifest;

/// Maps a component file to the conventional path of its examples file.
pub type ExampleFilenameFn = Arc<dyn Fn(&Path) -> PathBuf + Send + Sync>;

/// Maps a component path (relative to the config directory) to its display line.
pub type PathLineFn = Arc<dyn Fn(&Path) -> String + Send + Sync>;

/// A configuration member the synthesizer can't work without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ConfigDir,
    ExampleFilename,
    ComponentPathLine,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ConfigDir => "config_dir",
            Self::ExampleFilename => "example_filename",
            Self::ComponentPathLine => "component_path_line",
        })
    }
}

/// Read-only configuration handed to the synthesizer.
///
/// Every member is optional so that an incomplete configuration can be
/// represented and reported instead of failing at construction time. The
/// function members are shared, so a config can be cloned cheaply and used
/// from several worker threads at once.
#[derive(Clone, Default)]
pub struct LoaderConfig {
    /// Root directory that component paths are displayed relative to.
    pub config_dir: Option<PathBuf>,
    /// Examples file naming convention.
    pub example_filename: Option<ExampleFilenameFn>,
    /// Path line formatting.
    pub component_path_line: Option<PathLineFn>,
    /// Examples template used when a component has no examples file.
    pub default_example: Option<PathBuf>,
}

/// The required members of a [`LoaderConfig`], all present.
pub(crate) struct Capabilities<'a> {
    pub config_dir: &'a Path,
    pub example_filename: &'a ExampleFilenameFn,
    pub component_path_line: &'a PathLineFn,
}

impl LoaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    pub fn example_filename(
        mut self,
        f: impl Fn(&Path) -> PathBuf + Send + Sync + 'static,
    ) -> Self {
        self.example_filename = Some(Arc::new(f));
        self
    }

    pub fn component_path_line(mut self, f: impl Fn(&Path) -> String + Send + Sync + 'static) -> Self {
        self.component_path_line = Some(Arc::new(f));
        self
    }

    pub fn default_example(mut self, template: impl Into<PathBuf>) -> Self {
        self.default_example = Some(template.into());
        self
    }

    /// Build a complete configuration from folio.toml.
    ///
    /// Relative results of the examples convention and the default example
    /// are resolved against `config_dir`.
    pub fn from_manifest(manifest: &Manifest, config_dir: &Path) -> Self {
        let example_pattern = manifest.conventions.example_filename.clone();
        let example_root = config_dir.to_path_buf();
        let path_line_pattern = manifest.conventions.path_line.clone();

        let mut config = Self::new()
            .config_dir(config_dir)
            .example_filename(move |component| {
                let rendered = example_pattern.render(|placeholder| match placeholder {
                    "dir" => Some(
                        component
                            .parent()
                            .unwrap_or(Path::new(""))
                            .to_string_lossy()
                            .into_owned(),
                    ),
                    "stem" => file_stem(component),
                    "name" => name_fallback(component),
                    _ => None,
                });
                example_root.join(rendered)
            })
            .component_path_line(move |relative| {
                path_line_pattern.render(|placeholder| match placeholder {
                    "path" => Some(to_slash(relative)),
                    "dir" => Some(to_slash(relative.parent().unwrap_or(Path::new("")))),
                    "stem" => file_stem(relative),
                    "name" => name_fallback(relative),
                    _ => None,
                })
            });

        config.default_example = manifest.styleguide.default_example_path(config_dir);
        config
    }

    /// The first required member that is not set, if any.
    pub fn missing_capability(&self) -> Option<Capability> {
        self.capabilities().err()
    }

    pub(crate) fn capabilities(&self) -> std::result::Result<Capabilities<'_>, Capability> {
        Ok(Capabilities {
            config_dir: self.config_dir.as_deref().ok_or(Capability::ConfigDir)?,
            example_filename: self
                .example_filename
                .as_ref()
                .ok_or(Capability::ExampleFilename)?,
            component_path_line: self
                .component_path_line
                .as_ref()
                .ok_or(Capability::ComponentPathLine)?,
        })
    }
}

impl fmt::Debug for LoaderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoaderConfig")
            .field("config_dir", &self.config_dir)
            .field("example_filename", &self.example_filename.is_some())
            .field("component_path_line", &self.component_path_line.is_some())
            .field("default_example", &self.default_example)
            .finish()
    }
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}
