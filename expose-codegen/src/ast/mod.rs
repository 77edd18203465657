//! TypeScript AST builders for the pieces of generated index files.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod imports;
mod objects;

pub use imports::Import;
pub use objects::{JsObject, Property, PropertyValue};
