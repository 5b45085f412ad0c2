use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::utils::io;

/// Trait for the file operations a relocation needs.
pub trait FileSystem {
    /// Read a whole text file. A missing file yields `SourceNotFound`.
    fn read(&self, path: &Path) -> Result<String>;
    /// Replace a file's content via temp file + rename.
    fn write(&self, path: &Path, content: &str) -> Result<()>;
    /// Truncate and rewrite an existing file, following symlinks and keeping its permissions.
    fn write_in_place(&self, path: &Path, content: &str) -> Result<()>;
    fn ensure_dir(&self, dir: &Path) -> Result<()>;
    /// True for anything on disk at `path`, files or not.
    fn exists(&self, path: &Path) -> bool;
}

/// Local filesystem implementation
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::source_not_found(path.display().to_string())
            } else {
                Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
            }
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        io::write_file_atomic(path, content, &format!("write {}", path.display()))
    }

    fn write_in_place(&self, path: &Path, content: &str) -> Result<()> {
        io::write_file(path, content, &format!("write {}", path.display()))
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| {
                Error::internal_io(
                    e.to_string(),
                    Some(format!("create directory {}", dir.display())),
                )
            })?;
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Convenience function to get local filesystem
pub fn local() -> LocalFs {
    LocalFs::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::tempdir;

    #[test]
    fn test_local_fs_write_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.txt");
        let fs = local();

        fs.write(&path, "hello world").unwrap();
        let content = fs.read(&path).unwrap();
        assert_eq!(content, "hello world");
        assert!(fs.exists(&path));
    }

    #[test]
    fn test_local_fs_read_missing_is_source_not_found() {
        let dir = tempdir().unwrap();
        let err = local().read(&dir.path().join("absent.tsx")).unwrap_err();
        assert_eq!(err.code, ErrorCode::SourceNotFound);
    }

    #[test]
    fn test_local_fs_read_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let err = local().read(dir.path()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalIoError);
    }

    #[test]
    fn test_local_fs_ensure_dir_creates_chain() {
        let dir = tempdir().unwrap();
        let deep = dir.path().join("a/b/c/d");
        let fs = local();

        fs.ensure_dir(&deep).unwrap();
        assert!(deep.is_dir());
        // Second call is a no-op.
        fs.ensure_dir(&deep).unwrap();
        assert!(fs.exists(&deep));
    }

    #[cfg(unix)]
    #[test]
    fn test_local_fs_write_in_place_follows_symlink() {
        use std::os::unix::fs::{symlink, PermissionsExt};

        let dir = tempdir().unwrap();
        let target = dir.path().join("RealApp.tsx");
        let link = dir.path().join("App.tsx");
        std::fs::write(&target, "old").unwrap();
        std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o640)).unwrap();
        symlink(&target, &link).unwrap();

        local().write_in_place(&link, "new").unwrap();

        assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
        let mode = std::fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }
}
