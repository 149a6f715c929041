//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `servicegen-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{MetaDocument, ServiceDefinition, ServiceDocument, TargetEntry};
use crate::error::ServiceGenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `servicegen_adapters::filesystem::LocalFilesystem` (production)
/// - `servicegen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a whole file.
    fn read_file(&self, path: &Path) -> ServiceGenResult<Vec<u8>>;

    /// Regular files directly inside `dir`, sorted by name. Subdirectories
    /// are not listed or descended into.
    fn list_files(&self, dir: &Path) -> ServiceGenResult<Vec<PathBuf>>;

    /// Create or truncate `path` and write `content`.
    fn write_file(&self, path: &Path, content: &[u8]) -> ServiceGenResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ServiceGenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for turning raw document bytes into schema types.
///
/// `source` is only used for error messages.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentParser: Send + Sync {
    fn parse_meta(&self, source: &Path, bytes: &[u8]) -> ServiceGenResult<MetaDocument>;

    fn parse_service(&self, source: &Path, bytes: &[u8]) -> ServiceGenResult<ServiceDocument>;
}

/// Port for unit rendering.
///
/// Implementations receive already-validated input and must not validate
/// again. Template problems are expected to surface when the renderer is
/// built, not here.
#[cfg_attr(test, mockall::automock)]
pub trait UnitRenderer: Send + Sync {
    fn render_target(&self, target: &TargetEntry) -> ServiceGenResult<String>;

    fn render_service(&self, service: &ServiceDefinition) -> ServiceGenResult<String>;
}
