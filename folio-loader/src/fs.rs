use std::{io, path::Path};

/// Filesystem access needed by the synthesizer.
pub trait FileSystem {
    /// Whether a file exists at `path`.
    ///
    /// Absence is `Ok(false)`. Any other failure (permissions, I/O) is an
    /// error and must not be reported as absence.
    fn exists(&self, path: &Path) -> io::Result<bool>;
}

/// The real filesystem. Nothing is cached between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        match path.try_exists() {
            Ok(exists) => Ok(exists),
            // A path segment being a file means the examples file can't exist
            Err(e) if e.kind() == io::ErrorKind::NotADirectory => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        (**self).exists(path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Readme.md");
        fs::write(&path, "# Button").unwrap();

        assert!(OsFileSystem.exists(&path).unwrap());
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        assert!(!OsFileSystem.exists(&temp.path().join("Readme.md")).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_file_used_as_directory_is_absence() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("Button.js");
        fs::write(&file, "").unwrap();

        assert!(!OsFileSystem.exists(&file.join("Readme.md")).unwrap());
    }

    #[test]
    fn test_no_caching_between_calls() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Readme.md");

        assert!(!OsFileSystem.exists(&path).unwrap());
        fs::write(&path, "").unwrap();
        assert!(OsFileSystem.exists(&path).unwrap());
    }
}
