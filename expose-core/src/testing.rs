//! Test utilities for generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
};

use crate::{Workspace, workspace::has_extension};

/// In-memory [`Workspace`] that counts writes.
#[derive(Debug, Default)]
pub struct MemoryWorkspace {
    files: RefCell<BTreeMap<PathBuf, String>>,
    writes: Cell<usize>,
}

impl MemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file without counting it as a write.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.borrow_mut().insert(path.into(), content.into());
        self
    }

    /// Get the current content of a file.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Number of calls to [`Workspace::write`] so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl Workspace for MemoryWorkspace {
    fn discover(&self, root: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
        let files = self.files.borrow();
        let found: Vec<PathBuf> = files
            .keys()
            .filter(|path| path.starts_with(root) && has_extension(path, extension))
            .cloned()
            .collect();
        if found.is_empty() && !files.keys().any(|path| path.starts_with(root)) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("'{}' does not exist", root.display()),
            ));
        }
        Ok(found)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.file(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("'{}' does not exist", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        self.writes.set(self.writes.get() + 1);
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }
}
