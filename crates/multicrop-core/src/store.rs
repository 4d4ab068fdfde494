//! Where image bytes are read from and written to.
//!
//! The pipeline only talks to an [`ImageStore`]. Native front ends use
//! [`FsStore`]; the browser bindings and tests use [`MemoryStore`].

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Byte-level access to image files.
pub trait ImageStore {
    /// Read the full contents of `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create or replace `path` with `bytes`.
    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()>;
}

/// Filesystem-backed store.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl ImageStore for FsStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        std::fs::write(path, bytes)
    }
}

/// In-memory store keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, bytes: Vec<u8>) {
        self.files.insert(path.into(), bytes);
    }

    pub fn get(&self, path: &Path) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    pub fn remove(&mut self, path: &Path) -> Option<Vec<u8>> {
        self.files.remove(path)
    }

    /// Keep only the files for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&Path) -> bool) {
        self.files.retain(|path, _| keep(path.as_path()));
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ImageStore for MemoryStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        self.files.insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }
}
