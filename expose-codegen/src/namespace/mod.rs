//! Path-derived namespaces.
//!
//! A module's relative path is split into [`NamespaceSegments`], and all
//! segment sequences are folded into one [`NamespaceTree`] mirroring the
//! source directory structure.

mod segments;
mod tree;

pub use segments::{ModulePath, NO_DIRECTORY, NamespaceSegments};
pub use tree::{NamespaceBuilder, NamespaceTree, Node};
