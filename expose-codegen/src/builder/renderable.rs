//! Fragments produced by AST nodes and consumed by [`CodeBuilder`].
//!
//! [`CodeBuilder`]: super::CodeBuilder

/// A piece of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// One line, indented and terminated by a newline.
    Line(String),
    /// Text written as-is.
    Raw(String),
    /// `header`, then `body` one level deeper, then the optional `close` line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: impl Into<Option<String>>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: close.into(),
        }
    }
}

/// Implemented by AST nodes that render through a [`CodeBuilder`].
///
/// [`CodeBuilder`]: super::CodeBuilder
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}
