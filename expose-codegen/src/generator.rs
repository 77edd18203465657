use expose_core::{Workspace, WriteResult};

use crate::{
    EmitError, ExposeConfig,
    emit::{Artifact, Emitter, IndexArtifact, IndexEmitter, MetaArtifact, MetaEmitter},
};

/// What happened to one emitter's file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitStatus {
    /// The file was written.
    Written,
    /// The file already held the rendered content.
    Unchanged,
    /// Rendered only; `stale` tells whether a real run would write.
    Preview { stale: bool },
}

/// A rendered artifact together with its write status.
#[derive(Debug)]
pub struct Emitted<A> {
    pub artifact: A,
    pub status: EmitStatus,
}

/// Outcome of one emitter. Errors are captured here, never propagated.
pub type EmitOutcome<A> = Result<Emitted<A>, EmitError>;

/// Outcomes of both emitters of a run.
#[derive(Debug)]
pub struct GenerateReport {
    pub index: EmitOutcome<IndexArtifact>,
    pub meta: EmitOutcome<MetaArtifact>,
}

impl GenerateReport {
    /// Whether both emitters succeeded.
    pub fn is_complete(&self) -> bool {
        self.index.is_ok() && self.meta.is_ok()
    }

    /// Errors of failed emitters, labelled with the emitter name.
    pub fn errors(&self) -> Vec<(&'static str, &EmitError)> {
        let mut errors = Vec::new();
        if let Err(err) = &self.index {
            errors.push(("index", err));
        }
        if let Err(err) = &self.meta {
            errors.push(("metaInfo", err));
        }
        errors
    }
}

/// Runs the index emitter and then the metadata emitter.
///
/// A failure in one emitter never prevents the other from running.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    config: &'a ExposeConfig,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a ExposeConfig) -> Self {
        Self { config }
    }

    /// Render both files and write the ones whose rules require it.
    pub fn generate(&self, workspace: &dyn Workspace) -> GenerateReport {
        self.run(workspace, Mode::Write)
    }

    /// Render both files without writing anything.
    pub fn preview(&self, workspace: &dyn Workspace) -> GenerateReport {
        self.run(workspace, Mode::Preview)
    }

    fn run(&self, workspace: &dyn Workspace, mode: Mode) -> GenerateReport {
        let index = emit(&IndexEmitter::new(self.config), workspace, mode);
        let meta = emit(&MetaEmitter::new(self.config), workspace, mode);
        GenerateReport { index, meta }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Write,
    Preview,
}

fn emit<E: Emitter>(emitter: &E, workspace: &dyn Workspace, mode: Mode) -> EmitOutcome<E::Artifact> {
    let artifact = emitter.render(workspace)?;
    let file = artifact.file();
    let status = match mode {
        Mode::Preview => EmitStatus::Preview {
            stale: file.is_stale(workspace),
        },
        Mode::Write => match file.write(workspace) {
            Ok(WriteResult::Written) => EmitStatus::Written,
            Ok(WriteResult::Unchanged) => EmitStatus::Unchanged,
            Err(source) => {
                return Err(EmitError::Write {
                    path: file.path().to_path_buf(),
                    source,
                });
            }
        },
    };
    Ok(Emitted { artifact, status })
}
