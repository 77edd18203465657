//! `package.json` descriptor loading for the expose index generator.
//!
//! Only the fields the generator needs are typed; everything else in the
//! descriptor is kept untouched in [`PackageJson::extra`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod package;

pub use error::{Error, Result};
pub use package::{PACKAGE_JSON, PackageJson};
