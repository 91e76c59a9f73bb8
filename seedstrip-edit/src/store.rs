//! Port abstracting target-file I/O away from the rewriter.

use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;

/// Whole-file text access for target files.
pub trait FileStore {
    fn read_to_string(&self, path: &Utf8Path) -> io::Result<String>;
    fn write(&self, path: &Utf8Path, contents: &str) -> io::Result<()>;
}

/// Disk-backed store resolving relative target paths against `root`.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: Utf8PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn abs_path(&self, rel: &Utf8Path) -> Utf8PathBuf {
        if rel.is_absolute() {
            rel.to_path_buf()
        } else {
            self.root.join(rel)
        }
    }
}

impl FileStore for FsStore {
    fn read_to_string(&self, path: &Utf8Path) -> io::Result<String> {
        fs::read_to_string(self.abs_path(path))
    }

    fn write(&self, path: &Utf8Path, contents: &str) -> io::Result<()> {
        fs::write(self.abs_path(path), contents)
    }
}

/// In-memory store for exercising the rewriter without a file system.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<BTreeMap<Utf8PathBuf, String>>,
    read_only: BTreeSet<Utf8PathBuf>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<Utf8PathBuf>, contents: impl Into<String>) -> Self {
        self.files.borrow_mut().insert(path.into(), contents.into());
        self
    }

    /// Mark `path` so that writes to it fail with `PermissionDenied`.
    pub fn read_only(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.read_only.insert(path.into());
        self
    }

    pub fn get(&self, path: impl AsRef<Utf8Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }
}

impl FileStore for MemoryStore {
    fn read_to_string(&self, path: &Utf8Path) -> io::Result<String> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{path}: no such file"))
        })
    }

    fn write(&self, path: &Utf8Path, contents: &str) -> io::Result<()> {
        if self.read_only.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{path}: read-only"),
            ));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
