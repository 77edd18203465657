//! Emitters of the generated index and metadata files.
//!
//! An [`Emitter`] renders one artifact without touching its destination.
//! Writing is left to the [`Generator`](crate::Generator), which applies the
//! artifact's [`FileRules`] and captures every error per emitter.

mod index;
mod meta;

use expose_core::{File, FileRules, Workspace};

pub use index::{ImportEntry, IndexArtifact, IndexEmitter};
pub use meta::{MetaArtifact, MetaEmitter};

use crate::{EmitError, ExposeConfig};

/// Renders one generated file.
pub trait Emitter {
    type Artifact: Artifact;

    /// Render the artifact, reading whatever inputs it needs from `workspace`.
    fn render(&self, workspace: &dyn Workspace) -> Result<Self::Artifact, EmitError>;
}

/// Output of an [`Emitter`].
pub trait Artifact {
    /// The file to write.
    fn file(&self) -> &File;
}

/// Write rules for generated files under `config`.
pub(crate) fn file_rules(config: &ExposeConfig) -> FileRules {
    if config.force {
        FileRules::always()
    } else {
        FileRules::default()
    }
}
