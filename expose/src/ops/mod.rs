//! Core operations.
//!
//! This module contains the business logic of the expose command,
//! separated from CLI argument parsing and output rendering.

pub mod generate;

pub use generate::{GenerateOptions, generate};
