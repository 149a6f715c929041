//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use servicegen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ServiceGenError, ServiceGenResult},
};
use walkdir::WalkDir;

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
    fn read_file(&self, path: &Path) -> ServiceGenResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn list_files(&self, dir: &Path) -> ServiceGenResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                map_error(path, format!("Failed to list directory: {}", e))
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> ServiceGenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn create_dir_all(&self, path: &Path) -> ServiceGenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ServiceGenError {
    map_error(path.to_path_buf(), format!("Failed to {}: {}", operation, e))
}

fn map_error(path: PathBuf, reason: String) -> ServiceGenError {
    ApplicationError::FilesystemError { path, reason }.into()
}
