use std::path::{Path, PathBuf};

use folio_loader::LoaderConfig;
use folio_manifest::{FolioToml, Manifest};

/// An opened folio.toml together with the loader configuration derived from it.
pub struct Project {
    toml: FolioToml,
    loader: LoaderConfig,
}

impl Project {
    pub fn open(path: &Path) -> folio_manifest::Result<Self> {
        let toml = FolioToml::open(path)?;
        let loader = LoaderConfig::from_manifest(toml.manifest(), toml.config_dir());
        Ok(Self { toml, loader })
    }

    /// Absolute path of folio.toml.
    pub fn path(&self) -> &Path {
        self.toml.path()
    }

    pub fn manifest(&self) -> &Manifest {
        self.toml.manifest()
    }

    pub fn loader(&self) -> &LoaderConfig {
        &self.loader
    }

    pub fn components_dir(&self) -> PathBuf {
        self.manifest()
            .styleguide
            .components_dir(self.toml.config_dir())
    }

    pub fn output_dir(&self) -> PathBuf {
        self.manifest().styleguide.output_dir(self.toml.config_dir())
    }

    /// Discover component files, sorted.
    ///
    /// Files under the output directory are never components, even when
    /// it sits inside the components directory.
    pub fn components(&self) -> folio_loader::Result<Vec<PathBuf>> {
        let styleguide = &self.manifest().styleguide;
        let mut components = folio_loader::discover(
            &self.components_dir(),
            &styleguide.extensions,
            &styleguide.ignore,
        )?;
        let output_dir = self.output_dir();
        components.retain(|path| !path.starts_with(&output_dir));
        Ok(components)
    }
}
