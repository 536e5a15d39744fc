//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use ucgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::UcgenResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and
/// inspect the other.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    writes: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn insert_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            add_ancestors(&mut inner.directories, parent);
        }
        inner.files.insert(path, content.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Number of successful file writes so far.
    pub fn write_count(&self) -> usize {
        self.inner.read().unwrap().writes
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
        inner.writes = 0;
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn read_to_string(&self, path: &Path) -> UcgenResult<Option<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.files.get(path).cloned())
    }

    fn create_dir_all(&self, path: &Path) -> UcgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        add_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn write_new(&self, path: &Path, content: &str) -> UcgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.files.contains_key(path) {
            return Err(ApplicationError::ConcurrentModification {
                path: path.to_path_buf(),
            }
            .into());
        }
        insert_checked(&mut inner, path, content)
    }

    fn write_file(&self, path: &Path, content: &str) -> UcgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        insert_checked(&mut inner, path, content)
    }
}

fn add_ancestors(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn insert_checked(inner: &mut MemoryFilesystemInner, path: &Path, content: &str) -> UcgenResult<()> {
    // Ensure parent exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }
    }

    inner.files.insert(path.to_path_buf(), content.to_string());
    inner.writes += 1;
    Ok(())
}

#[cfg(test)]
mod tests {
    use ucgen_core::error::UcgenError;

    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/p/a.ts"), "x").is_err());

        fs.create_dir_all(Path::new("/p")).unwrap();
        fs.write_file(Path::new("/p/a.ts"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("/p/a.ts")).as_deref(), Some("x"));
        assert!(fs.exists(Path::new("/p")));
    }

    #[test]
    fn write_new_detects_existing_file() {
        let fs = MemoryFilesystem::new();
        fs.insert_file("/p/src/a.ts", "hand written");

        let err = fs.write_new(Path::new("/p/src/a.ts"), "generated").unwrap_err();
        assert!(matches!(
            err,
            UcgenError::Application(ApplicationError::ConcurrentModification { .. })
        ));
        assert_eq!(
            fs.read_file(Path::new("/p/src/a.ts")).as_deref(),
            Some("hand written")
        );
        assert_eq!(fs.write_count(), 0);
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        other.insert_file("/p/x.ts", "");
        assert_eq!(fs.list_files(), [PathBuf::from("/p/x.ts")]);

        fs.clear();
        assert!(other.list_files().is_empty());
    }
}
