//! Core utilities and types for the expose index generator.
//!
//! This crate provides the generated-file write rules and the [`Workspace`]
//! port through which every filesystem access of the generator goes.

mod file;
mod workspace;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// File operations
pub use file::{File, FileRules, Overwrite, WriteResult};
// Filesystem access
pub use workspace::{LocalWorkspace, Workspace};
