use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use expose_core::{File, Workspace};
use expose_package::PackageJson;
use serde::Serialize;

use super::{Artifact, Emitter, file_rules};
use crate::{
    Diagnostic, EmitError, ExposeConfig,
    ast::Import,
    config::{normalize, relative_to},
    namespace::{ModulePath, NamespaceBuilder, NamespaceTree},
    naming,
    template::{INDEX_TEMPLATE, Template},
};

const PHASE: &str = "imports";

/// Suffix under which the core library registers itself.
const CORE_SUFFIX: &str = "core";

/// One import statement of the index file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportEntry {
    /// Module specifier, `./` plus the relative path without extension.
    pub path: String,
    /// Identifier the default export is bound to.
    pub key: String,
}

/// Fields available to the index template.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TemplateArgs<'a> {
    export_object: String,
    import_core: String,
    register_namespace: String,
    imports: &'a [ImportEntry],
    main_path: String,
    register_code: String,
    name: &'a str,
    version: &'a str,
}

/// The rendered index file and everything derived on the way.
#[derive(Debug, Clone)]
pub struct IndexArtifact {
    pub file: File,
    /// Registration suffix under `GrimoireJS.lib`.
    pub suffix: String,
    /// Every file found under the source root, before exclusions.
    pub discovered: Vec<PathBuf>,
    /// Modules included in the index, in discovery order.
    pub modules: Vec<ModulePath>,
    pub imports: Vec<ImportEntry>,
    pub tree: NamespaceTree,
    pub diagnostics: Vec<Diagnostic>,
}

impl Artifact for IndexArtifact {
    fn file(&self) -> &File {
        &self.file
    }
}

/// Builds the index file re-exporting every module under its namespace.
#[derive(Debug, Clone, Copy)]
pub struct IndexEmitter<'a> {
    config: &'a ExposeConfig,
}

impl<'a> IndexEmitter<'a> {
    pub fn new(config: &'a ExposeConfig) -> Self {
        Self { config }
    }

    fn is_excluded(&self, module: &ModulePath, skip: &[PathBuf]) -> bool {
        module.is_declaration() || skip.contains(&normalize(&module.absolute))
    }

    fn main_path(&self, src_root: &Path) -> String {
        let relative = relative_to(src_root, &self.config.main_path());
        let stem = relative
            .strip_suffix(".ts")
            .or_else(|| relative.strip_suffix(".js"))
            .unwrap_or(&relative);
        format!("./{stem}")
    }

    fn register_code(&self, suffix: &str) -> String {
        let target = if self.config.ts {
            r#"(window as any)["GrimoireJS"]"#
        } else {
            r#"window["GrimoireJS"]"#
        };
        format!("{target}.lib.{suffix} = __EXPOSE__;")
    }
}

impl Emitter for IndexEmitter<'_> {
    type Artifact = IndexArtifact;

    fn render(&self, workspace: &dyn Workspace) -> Result<IndexArtifact, EmitError> {
        let config = self.config;
        let template = Template::load_or(
            workspace,
            config.index_template_path().as_deref(),
            "index",
            INDEX_TEMPLATE,
        )?;
        let package = PackageJson::load(workspace, &normalize(&config.cwd))?;
        let suffix = if config.core {
            CORE_SUFFIX.to_string()
        } else {
            naming::identifier(package.short_name())
        };

        let src_root = config.src_root();
        let discovered = workspace
            .discover(&src_root, config.extension())
            .map_err(|source| EmitError::Discover {
                root: src_root.clone(),
                source,
            })?;

        let skip = [config.dest_path(), config.main_path(), config.meta_path()];
        let mut builder = NamespaceBuilder::new();
        let mut modules = Vec::new();
        for path in &discovered {
            let Some(module) = ModulePath::new(&src_root, path.clone()) else {
                continue;
            };
            if self.is_excluded(&module, &skip) {
                continue;
            }
            workspace
                .read_to_string(&module.absolute)
                .map_err(|source| EmitError::ReadModule {
                    path: module.absolute.clone(),
                    source,
                })?;
            builder.add(&module.segments);
            modules.push(module);
        }

        let (tree, mut diagnostics) = builder.finish();
        let imports = import_entries(&modules, &mut diagnostics);

        let args = TemplateArgs {
            export_object: tree.to_js_object().build(),
            import_core: if config.core {
                String::new()
            } else {
                Import::new("gr", "grimoirejs").build()
            },
            register_namespace: if config.core {
                String::new()
            } else {
                "gr.notifyRegisteringPlugin(__META__.__NAMESPACE__);".to_string()
            },
            imports: &imports,
            main_path: self.main_path(&src_root),
            register_code: self.register_code(&suffix),
            name: &package.name,
            version: &package.version,
        };
        let content = template.render(&args)?;

        Ok(IndexArtifact {
            file: File::new(config.dest_path(), content).with_rules(file_rules(config)),
            suffix,
            discovered,
            modules,
            imports,
            tree,
            diagnostics,
        })
    }
}

/// One import per module, warning when two modules share an identifier.
fn import_entries(modules: &[ModulePath], diagnostics: &mut Vec<Diagnostic>) -> Vec<ImportEntry> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    modules
        .iter()
        .map(|module| {
            let key = module.segments.identifier();
            if let Some(first) = seen.insert(key.clone(), &module.relative) {
                diagnostics.push(
                    Diagnostic::warning(
                        PHASE,
                        format!(
                            "'{}' and '{}' both bind identifier '{}'",
                            first, module.relative, key
                        ),
                    )
                    .at(module.segments.dotted()),
                );
            }
            ImportEntry {
                path: module.import_path(),
                key,
            }
        })
        .collect()
}
