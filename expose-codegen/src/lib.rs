//! Index generation for modular GrimoireJS packages.
//!
//! Modules found under a source root are folded into a namespace tree that
//! mirrors their directories, and re-exported from a generated index file.
//! A second file carries the package name and version.
//!
//! # Module Organization
//!
//! - [`namespace`] - Path classification and the namespace tree
//! - [`naming`] - Identifier sanitizing
//! - [`ast`] / [`builder`] - TypeScript building blocks for generated code
//! - [`template`] - minijinja templates of the generated files
//! - [`emit`] - The index and metadata emitters
//! - [`Generator`] - Runs both emitters and captures their errors
//!
//! ```no_run
//! use expose_codegen::{ExposeConfig, Generator};
//! use expose_core::LocalWorkspace;
//!
//! let mut config = ExposeConfig::new("/path/to/package");
//! config.ts = true;
//! let report = Generator::new(&config).generate(&LocalWorkspace);
//! assert!(report.is_complete());
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod ast;
pub mod builder;
pub mod config;
pub mod diagnostic;
pub mod emit;
mod error;
mod generator;
pub mod namespace;
pub mod naming;
pub mod template;

pub use config::ExposeConfig;
pub use diagnostic::Diagnostic;
pub use error::EmitError;
pub use generator::{EmitOutcome, EmitStatus, Emitted, GenerateReport, Generator};
