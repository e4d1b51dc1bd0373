use std::path::{Path, PathBuf};

use crate::{Error, Manifest, Result};

/// Represents a folio.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct FolioToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl FolioToml {
    /// Open and parse a folio.toml file.
    ///
    /// The path is made absolute so that [`config_dir`](Self::config_dir)
    /// can anchor every relative setting.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = std::path::absolute(path.as_ref()).map_err(|e| {
            Box::new(Error::Io {
                path: path.as_ref().to_path_buf(),
                source: e,
            })
        })?;
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the absolute file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing folio.toml; relative settings resolve against it.
    pub fn config_dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("/"))
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "[styleguide]\ntitle = \"Kit\"\n").unwrap();

        let file = FolioToml::open(&path).unwrap();

        assert_eq!(file.manifest().styleguide.title, "Kit");
        assert_eq!(file.config_dir(), temp.path());
        assert!(file.path().is_absolute());
        assert!(file.content().contains("Kit"));
    }

    #[test]
    fn test_open_reports_filename_in_parse_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "[styleguide\n").unwrap();

        let err = FolioToml::open(&path).unwrap_err();
        match *err {
            Error::Parse { src, .. } => assert!(src.name().ends_with("folio.toml")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
