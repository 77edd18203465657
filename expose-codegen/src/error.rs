use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error raised inside one emitter.
///
/// Emitters never propagate these past their own boundary; they end up in
/// the per-emitter outcome of a generation run.
#[derive(Debug, Error, Diagnostic)]
pub enum EmitError {
    #[error(transparent)]
    #[diagnostic(code(expose::package))]
    Package(#[from] Box<expose_package::Error>),

    #[error("failed to read template '{path}'")]
    #[diagnostic(code(expose::template_read))]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to compile template '{name}'")]
    #[diagnostic(
        code(expose::template_compile),
        help("templates use minijinja syntax, e.g. {{{{ name }}}}")
    )]
    CompileTemplate {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to render template '{name}'")]
    #[diagnostic(code(expose::template_render))]
    RenderTemplate {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to discover modules under '{root}'")]
    #[diagnostic(
        code(expose::discover),
        help("check that --src points to an existing directory")
    )]
    Discover {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read module '{path}'")]
    #[diagnostic(code(expose::read_module))]
    ReadModule {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(expose::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
