use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    Conventions, EXAMPLE_FILENAME_PLACEHOLDERS, Error, PATH_LINE_PLACEHOLDERS, Result,
    StyleguideConfig, validate::ParseContext,
};

/// Root manifest for folio.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Style guide settings
    #[serde(default)]
    pub styleguide: StyleguideConfig,

    /// Naming conventions for examples files and path lines
    #[serde(default)]
    pub conventions: Conventions,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "folio.toml")
    }
}

impl Manifest {
    /// Parse a folio.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a folio.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let manifest: Self =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        manifest.validate(content, filename)?;
        Ok(manifest)
    }

    /// Validate the manifest after parsing
    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let ctx = ParseContext::new(src, filename);

        let styleguide = ctx.push("styleguide");
        let config = &self.styleguide;

        if config.extensions.is_empty() {
            return Err(styleguide.error_at("extensions", "at least one extension is required"));
        }
        if let Some(ext) = config
            .extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.starts_with('.'))
        {
            return Err(styleguide.error_at(
                "extensions",
                format!("extension '{ext}' must be written without a leading dot"),
            ));
        }
        if config.components.is_absolute() {
            return Err(styleguide.error_at(
                "components",
                "components directory must be relative to folio.toml",
            ));
        }
        if config.output.is_absolute() {
            return Err(styleguide.error_at(
                "output",
                "output directory must be relative to folio.toml",
            ));
        }

        let conventions = ctx.push("conventions");
        conventions.validate_pattern(
            &self.conventions.example_filename,
            "example_filename",
            EXAMPLE_FILENAME_PLACEHOLDERS,
        )?;
        conventions.validate_pattern(
            &self.conventions.path_line,
            "path_line",
            PATH_LINE_PLACEHOLDERS,
        )?;

        Ok(())
    }
}
