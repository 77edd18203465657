//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Builds indented code line by line
//! - [`CodeFragment`] - Lines and blocks produced by AST nodes
//! - [`Renderable`] - Trait for types that can be converted to code fragments

mod code_builder;
mod renderable;

pub use code_builder::{CodeBuilder, TYPESCRIPT_INDENT};
pub use renderable::{CodeFragment, Renderable};
