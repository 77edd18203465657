//! Filesystem port used by the generator.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

/// Filesystem access needed to discover modules and emit generated files.
///
/// Every read, write and existence check of the generator goes through this
/// trait so a run can be replayed against an in-memory tree.
pub trait Workspace {
    /// List every file below `root` whose extension is `extension`.
    ///
    /// The returned paths are absolute when `root` is, and their order is
    /// stable for a given tree.
    fn discover(&self, root: &Path, extension: &str) -> io::Result<Vec<PathBuf>>;

    /// Read the entire contents of a file.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Create or overwrite a file, creating parent directories as needed.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Returns `true` if something exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// [`Workspace`] backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalWorkspace;

impl Workspace for LocalWorkspace {
    fn discover(&self, root: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() && has_extension(entry.path(), extension) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

pub(crate) fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}
