//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from one generation run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Whether files were only previewed.
    pub dry_run: bool,

    /// Warning messages from building the namespace tree.
    pub warnings: Vec<String>,

    /// Debug details, present with `--debug`.
    pub debug: Option<DebugInfo>,

    /// Files rendered by successful emitters.
    pub files: Vec<FileReport>,

    /// Emitters that failed.
    pub failures: Vec<EmitFailure>,
}

/// What the run did with one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    Written,
    Unchanged,
    /// Dry run; a real run would write.
    WouldWrite,
    /// Dry run; the file is already up to date.
    UpToDate,
}

/// A file rendered by one emitter.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub state: FileState,
    pub content: String,
}

/// An emitter that failed, with its rendered diagnostic.
#[derive(Debug)]
pub struct EmitFailure {
    pub emitter: &'static str,
    pub message: String,
}

/// Paths and intermediate results printed with `--debug`.
#[derive(Debug)]
pub struct DebugInfo {
    pub cwd: PathBuf,
    pub dest: PathBuf,
    pub main: PathBuf,
    pub src_root: PathBuf,
    /// Absent when the index emitter failed.
    pub index: Option<IndexDebug>,
}

/// Results of a successful index emitter.
#[derive(Debug)]
pub struct IndexDebug {
    pub suffix: String,
    pub discovered: Vec<PathBuf>,
    pub targets: Vec<String>,
    /// Namespace tree as pretty JSON.
    pub tree: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(debug) = &self.debug {
            debug.render(out);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        if self.dry_run {
            self.render_preview(out);
        } else {
            self.render_written(out);
        }

        for failure in &self.failures {
            out.error(&format!("{} generation failed", failure.emitter));
            out.preformatted(&failure.message);
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output) {
        let (written, unchanged): (Vec<_>, Vec<_>) = self
            .files
            .iter()
            .partition(|f| f.state == FileState::Written);

        if !written.is_empty() {
            out.section("Generated");
            for file in &written {
                out.added_item(&file.path.display().to_string());
            }
        }
        if !unchanged.is_empty() {
            if !written.is_empty() {
                out.newline();
            }
            out.section("Unchanged");
            for file in &unchanged {
                out.list_item(&file.path.display().to_string());
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output) {
        for file in &self.files {
            out.divider(&file.path.display().to_string());
            out.preformatted(&file.content);
        }

        let stale = self
            .files
            .iter()
            .filter(|f| f.state == FileState::WouldWrite)
            .count();
        out.divider("Summary");
        out.preformatted(&format!("{} files would be written", stale));
    }
}

impl DebugInfo {
    fn render(&self, out: &mut dyn Output) {
        out.debug(&format!("cwd: {}", self.cwd.display()));
        out.debug(&format!("destination: {}", self.dest.display()));
        out.debug(&format!("main file: {}", self.main.display()));
        out.debug(&format!("base path: {}", self.src_root.display()));
        let Some(index) = &self.index else {
            return;
        };
        out.debug(&format!("project suffix: {}", index.suffix));
        out.debug("detected files:");
        for path in &index.discovered {
            out.debug(&format!("  {}", path.display()));
        }
        out.debug("target files:");
        for target in &index.targets {
            out.debug(&format!("  {}", target));
        }
        out.debug("namespace tree:");
        out.preformatted(&index.tree);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Output for Recorder {
        fn section(&mut self, name: &str) {
            self.0.push(format!("{name}:"));
        }
        fn list_item(&mut self, text: &str) {
            self.0.push(format!("- {text}"));
        }
        fn added_item(&mut self, text: &str) {
            self.0.push(format!("+ {text}"));
        }
        fn debug(&mut self, msg: &str) {
            self.0.push(format!("debug {msg}"));
        }
        fn warning(&mut self, msg: &str) {
            self.0.push(format!("warning {msg}"));
        }
        fn error(&mut self, msg: &str) {
            self.0.push(format!("error {msg}"));
        }
        fn divider(&mut self, label: &str) {
            self.0.push(format!("== {label}"));
        }
        fn preformatted(&mut self, text: &str) {
            self.0.push(text.to_string());
        }
        fn newline(&mut self) {
            self.0.push(String::new());
        }
    }

    fn file(path: &str, state: FileState) -> FileReport {
        FileReport {
            path: PathBuf::from(path),
            state,
            content: "content".into(),
        }
    }

    #[test]
    fn test_render_written_and_failures() {
        let report = GenerateReport {
            warnings: vec!["namespace 'foo' replaces module 'foo'".into()],
            files: vec![file("/p/src/index.ts", FileState::Written)],
            failures: vec![EmitFailure {
                emitter: "metaInfo",
                message: "failed to read template".into(),
            }],
            ..GenerateReport::default()
        };
        let mut out = Recorder::default();
        report.render(&mut out);
        assert_eq!(
            out.0,
            [
                "warning namespace 'foo' replaces module 'foo'",
                "Generated:",
                "+ /p/src/index.ts",
                "error metaInfo generation failed",
                "failed to read template",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            dry_run: true,
            files: vec![
                file("/p/src/index.ts", FileState::WouldWrite),
                file("/p/src/metaInfo.ts", FileState::UpToDate),
            ],
            ..GenerateReport::default()
        };
        let mut out = Recorder::default();
        report.render(&mut out);
        assert_eq!(out.0.last().map(String::as_str), Some("1 files would be written"));
        assert!(out.0.contains(&"== /p/src/metaInfo.ts".to_string()));
    }

    #[test]
    fn test_render_debug_without_index() {
        let report = GenerateReport {
            debug: Some(DebugInfo {
                cwd: PathBuf::from("/p"),
                dest: PathBuf::from("/p/src/index.ts"),
                main: PathBuf::from("/p/src/main.ts"),
                src_root: PathBuf::from("/p/src"),
                index: None,
            }),
            ..GenerateReport::default()
        };
        let mut out = Recorder::default();
        report.render(&mut out);
        assert_eq!(
            out.0,
            [
                "debug cwd: /p",
                "debug destination: /p/src/index.ts",
                "debug main file: /p/src/main.ts",
                "debug base path: /p/src",
            ]
        );
    }
}
