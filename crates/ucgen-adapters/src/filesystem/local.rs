//! Local filesystem adapter using std::fs.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tracing::trace;
use ucgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{UcgenError, UcgenResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> UcgenResult<Option<String>> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(map_io_error(path, e, "read file")),
        }
    }

    fn create_dir_all(&self, path: &Path) -> UcgenResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_new(&self, path: &Path, content: &str) -> UcgenResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_new");
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => ApplicationError::ConcurrentModification {
                    path: path.to_path_buf(),
                }
                .into(),
                _ => map_io_error(path, e, "create file"),
            })?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "write file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> UcgenResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> UcgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        assert_eq!(fs.read_to_string(&dir.path().join("nope.ts")).unwrap(), None);
    }

    #[test]
    fn write_new_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.ts");
        let fs = LocalFilesystem::new();

        fs.write_new(&path, "first").unwrap();
        let err = fs.write_new(&path, "second").unwrap_err();

        assert!(matches!(
            err,
            UcgenError::Application(ApplicationError::ConcurrentModification { .. })
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn write_file_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("src/di");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&nested).unwrap();
        let path = nested.join("symbols.ts");
        fs.write_file(&path, "one").unwrap();
        fs.write_file(&path, "two").unwrap();

        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn write_without_parent_is_a_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let err = fs
            .write_new(&dir.path().join("missing/a.ts"), "x")
            .unwrap_err();
        assert!(matches!(
            err,
            UcgenError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
