use std::{
    io,
    path::{Path, PathBuf},
};

use crate::Workspace;

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already holds exactly this content
    Unchanged,
}

/// A file to be generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: write only if changed)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules of this file.
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the write rules
    pub fn rules(&self) -> &FileRules {
        &self.rules
    }

    /// Check whether the file on disk differs from the generated content.
    ///
    /// A missing or unreadable destination counts as stale.
    pub fn is_stale(&self, workspace: &dyn Workspace) -> bool {
        if !workspace.exists(&self.path) {
            return true;
        }
        match workspace.read_to_string(&self.path) {
            Ok(existing) => existing != self.content,
            Err(_) => true,
        }
    }

    /// Write the file according to its rules
    pub fn write(&self, workspace: &dyn Workspace) -> io::Result<WriteResult> {
        match self.rules.overwrite {
            Overwrite::Always => {
                workspace.write(&self.path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfChanged => {
                if self.is_stale(workspace) {
                    workspace.write(&self.path, &self.content)?;
                    Ok(WriteResult::Written)
                } else {
                    Ok(WriteResult::Unchanged)
                }
            }
        }
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Rules that rewrite the file on every run.
    pub fn always() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite
    Always,
    /// Only write when the file is missing or its content differs
    IfChanged,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::IfChanged,
        }
    }
}
