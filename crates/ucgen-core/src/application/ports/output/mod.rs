//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `ucgen-adapters` crate provides implementations.

use std::path::Path;

use crate::error::UcgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `ucgen_adapters::filesystem::LocalFilesystem` (production)
/// - `ucgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are absolute: the service resolves relative plan paths against the
/// request's project root before calling in.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a UTF-8 file. `Ok(None)` when it does not exist.
    fn read_to_string(&self, path: &Path) -> UcgenResult<Option<String>>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> UcgenResult<()>;

    /// Write a file that must not exist yet.
    ///
    /// Fails with `ApplicationError::ConcurrentModification` when the path
    /// already exists; the existing file is left untouched.
    fn write_new(&self, path: &Path, content: &str) -> UcgenResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> UcgenResult<()>;
}
