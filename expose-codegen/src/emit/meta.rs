use expose_core::{File, Workspace};
use expose_package::PackageJson;
use serde::Serialize;

use super::{Artifact, Emitter, file_rules};
use crate::{
    EmitError, ExposeConfig,
    config::normalize,
    template::{META_TEMPLATE, Template},
};

#[derive(Debug, Serialize)]
struct TemplateArgs<'a> {
    name: &'a str,
    version: &'a str,
}

/// The rendered metadata file.
#[derive(Debug, Clone)]
pub struct MetaArtifact {
    pub file: File,
    pub name: String,
    pub version: String,
}

impl Artifact for MetaArtifact {
    fn file(&self) -> &File {
        &self.file
    }
}

/// Builds the metadata file holding the package name and version.
#[derive(Debug, Clone, Copy)]
pub struct MetaEmitter<'a> {
    config: &'a ExposeConfig,
}

impl<'a> MetaEmitter<'a> {
    pub fn new(config: &'a ExposeConfig) -> Self {
        Self { config }
    }
}

impl Emitter for MetaEmitter<'_> {
    type Artifact = MetaArtifact;

    fn render(&self, workspace: &dyn Workspace) -> Result<MetaArtifact, EmitError> {
        let config = self.config;
        let template = Template::load_or(
            workspace,
            config.meta_template_path().as_deref(),
            "metaInfo",
            META_TEMPLATE,
        )?;
        let package = PackageJson::load(workspace, &normalize(&config.cwd))?;
        let content = template.render(TemplateArgs {
            name: &package.name,
            version: &package.version,
        })?;

        Ok(MetaArtifact {
            file: File::new(config.meta_path(), content).with_rules(file_rules(config)),
            name: package.name,
            version: package.version,
        })
    }
}
