//! Generate operation - index and metadata files from the source tree.

use expose_codegen::{
    EmitError, EmitOutcome, EmitStatus, ExposeConfig, Generator,
    emit::{Artifact, IndexArtifact},
};
use expose_core::Workspace;

use crate::reports::{DebugInfo, EmitFailure, FileReport, FileState, GenerateReport, IndexDebug};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    pub config: &'a ExposeConfig,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Failures of either emitter end up in the report; nothing is propagated.
pub fn generate(workspace: &dyn Workspace, opts: GenerateOptions) -> GenerateReport {
    let config = opts.config;
    let generator = Generator::new(config);
    let outcome = if opts.dry_run {
        generator.preview(workspace)
    } else {
        generator.generate(workspace)
    };

    let mut report = GenerateReport {
        dry_run: opts.dry_run,
        ..GenerateReport::default()
    };

    if config.debug {
        report.debug = Some(debug_info(config, outcome.index.as_ref().ok().map(|e| &e.artifact)));
    }
    match outcome.index {
        Ok(emitted) => {
            let index = &emitted.artifact;
            report.warnings = index.diagnostics.iter().map(|d| d.message.clone()).collect();
            report.files.push(file_report(emitted.status, index));
        }
        Err(err) => report.failures.push(failure("index", err)),
    }
    collect(&mut report, "metaInfo", outcome.meta);

    report
}

fn collect<A: Artifact>(report: &mut GenerateReport, emitter: &'static str, outcome: EmitOutcome<A>) {
    match outcome {
        Ok(emitted) => report
            .files
            .push(file_report(emitted.status, &emitted.artifact)),
        Err(err) => report.failures.push(failure(emitter, err)),
    }
}

fn file_report(status: EmitStatus, artifact: &impl Artifact) -> FileReport {
    let file = artifact.file();
    let state = match status {
        EmitStatus::Written => FileState::Written,
        EmitStatus::Unchanged => FileState::Unchanged,
        EmitStatus::Preview { stale: true } => FileState::WouldWrite,
        EmitStatus::Preview { stale: false } => FileState::UpToDate,
    };
    FileReport {
        path: file.path().to_path_buf(),
        state,
        content: file.content().to_string(),
    }
}

fn failure(emitter: &'static str, err: EmitError) -> EmitFailure {
    EmitFailure {
        emitter,
        message: format!("{:?}", miette::Report::new(err)),
    }
}

fn debug_info(config: &ExposeConfig, index: Option<&IndexArtifact>) -> DebugInfo {
    DebugInfo {
        cwd: config.cwd.clone(),
        dest: config.dest_path(),
        main: config.main_path(),
        src_root: config.src_root(),
        index: index.map(|index| IndexDebug {
            suffix: index.suffix.clone(),
            discovered: index.discovered.clone(),
            targets: index.modules.iter().map(|m| m.relative.clone()).collect(),
            tree: serde_json::to_string_pretty(&index.tree.to_json()).unwrap_or_default(),
        }),
    }
}
