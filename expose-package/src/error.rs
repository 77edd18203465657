use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for descriptor operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(expose::package_io),
        help("run expose from the directory containing package.json, or pass --cwd")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse package.json")]
    #[diagnostic(code(expose::package_parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("package {field} must not be empty")]
    #[diagnostic(code(expose::package_field))]
    EmptyField {
        #[source_code]
        src: NamedSource<String>,
        field: &'static str,
    },
}

impl Error {
    /// Create a parse error from a serde_json error with source context
    pub fn parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = offset_of(src, source.line(), source.column()).map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create an empty field error with source context
    pub fn empty_field(field: &'static str, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::EmptyField {
            src: NamedSource::new(filename, src.to_string()),
            field,
        })
    }
}

/// Convert serde_json's 1-based line and column into a byte offset.
///
/// serde_json reports line 0 for errors that are not tied to a position.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}
