//! Compiled templates for generated files.
//!
//! Templates use minijinja syntax. Block tags swallow their own line,
//! nothing is auto-escaped and undefined fields render empty.

use std::path::Path;

use expose_core::Workspace;
use minijinja::{AutoEscape, Environment};
use serde::Serialize;

use crate::EmitError;

/// Embedded default template of the index file.
pub const INDEX_TEMPLATE: &str = include_str!("../templates/index.ts.jinja");

/// Embedded default template of the metadata file.
pub const META_TEMPLATE: &str = include_str!("../templates/metaInfo.ts.jinja");

/// A compiled template, ready to render.
#[derive(Debug)]
pub struct Template {
    env: Environment<'static>,
    name: String,
}

impl Template {
    /// Compile template source under the given name.
    pub fn compile(name: impl Into<String>, source: impl Into<String>) -> Result<Self, EmitError> {
        let name = name.into();
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_template_owned(name.clone(), source.into())
            .map_err(|source| EmitError::CompileTemplate {
                name: name.clone(),
                source,
            })?;
        Ok(Self { env, name })
    }

    /// Read and compile a template file.
    pub fn load(workspace: &dyn Workspace, path: &Path) -> Result<Self, EmitError> {
        let source = workspace
            .read_to_string(path)
            .map_err(|source| EmitError::ReadTemplate {
                path: path.to_path_buf(),
                source,
            })?;
        Self::compile(path.display().to_string(), source)
    }

    /// Load `path` when given, otherwise compile the embedded default.
    pub fn load_or(
        workspace: &dyn Workspace,
        path: Option<&Path>,
        name: &str,
        default: &str,
    ) -> Result<Self, EmitError> {
        match path {
            Some(path) => Self::load(workspace, path),
            None => Self::compile(name, default),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the template with the given context.
    pub fn render<S: Serialize>(&self, ctx: S) -> Result<String, EmitError> {
        let render_error = |source: minijinja::Error| EmitError::RenderTemplate {
            name: self.name.clone(),
            source,
        };
        self.env
            .get_template(&self.name)
            .map_err(render_error)?
            .render(ctx)
            .map_err(render_error)
    }
}
