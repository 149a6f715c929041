//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use servicegen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ServiceGenError, ServiceGenResult},
};

/// In-memory filesystem for testing.
///
/// Cloning shares the underlying storage, so a test can hand one clone to
/// the service and inspect the other afterwards.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_directory(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn with_file(self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> Self {
        {
            let mut inner = self.inner.write().unwrap();
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                inner.add_directory(parent);
            }
            inner
                .files
                .insert(path.to_path_buf(), content.as_ref().to_vec());
        }
        self
    }

    /// Read a file's content as text (testing helper).
    pub fn read_string(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        let bytes = inner.files.get(path.as_ref())?;
        String::from_utf8(bytes.clone()).ok()
    }

    /// List all files, sorted.
    pub fn list_all(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    fn read_guard(&self) -> ServiceGenResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write_guard(&self) -> ServiceGenResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| poisoned())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_file(&self, path: &Path) -> ServiceGenResult<Vec<u8>> {
        let inner = self.read_guard()?;
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path, "Failed to read file: no such file"))
    }

    fn list_files(&self, dir: &Path) -> ServiceGenResult<Vec<PathBuf>> {
        let inner = self.read_guard()?;
        if !inner.directories.contains(dir) {
            return Err(not_found(dir, "Failed to list directory: no such directory"));
        }
        // BTreeMap keeps paths sorted.
        Ok(inner
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> ServiceGenResult<()> {
        let mut inner = self.write_guard()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(not_found(path, "Parent directory does not exist"));
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> ServiceGenResult<()> {
        self.write_guard()?.add_directory(path);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
    }
}

fn not_found(path: &Path, reason: &str) -> ServiceGenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

fn poisoned() -> ServiceGenError {
    ServiceGenError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}
