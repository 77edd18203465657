use std::path::PathBuf;

use clap::Args;
use expose_codegen::{
    ExposeConfig,
    config::{DEFAULT_DEST, DEFAULT_MAIN, DEFAULT_SRC},
};
use expose_core::LocalWorkspace;
use eyre::{Context, Result};

use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Index file to generate
    #[arg(long, default_value = DEFAULT_DEST)]
    pub dest: PathBuf,

    /// Main entry module, imported by the index
    #[arg(long, default_value = DEFAULT_MAIN)]
    pub main: PathBuf,

    /// Source directory to scan for modules
    #[arg(long, default_value = DEFAULT_SRC)]
    pub src: PathBuf,

    /// Generate the index of the core library instead of a plugin
    #[arg(long)]
    pub core: bool,

    /// Scan .ts files instead of .js files
    #[arg(long)]
    pub ts: bool,

    /// Print discovered files and the namespace tree
    #[arg(long)]
    pub debug: bool,

    /// Working directory (defaults to the current directory)
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Template replacing the built-in index template
    #[arg(long)]
    pub index_template: Option<PathBuf>,

    /// Template replacing the built-in metadata template
    #[arg(long)]
    pub meta_template: Option<PathBuf>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write files even if their content is unchanged
    #[arg(long)]
    pub force: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.config()?;
        let report = ops::generate(
            &LocalWorkspace,
            GenerateOptions {
                config: &config,
                dry_run: self.dry_run,
            },
        );
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn config(&self) -> Result<ExposeConfig> {
        let current = std::env::current_dir().wrap_err("Failed to read current directory")?;
        let cwd = match &self.cwd {
            Some(cwd) => current.join(cwd),
            None => current,
        };
        Ok(ExposeConfig {
            cwd,
            dest: self.dest.clone(),
            main: self.main.clone(),
            src: self.src.clone(),
            core: self.core,
            ts: self.ts,
            debug: self.debug,
            index_template: self.index_template.clone(),
            meta_template: self.meta_template.clone(),
            force: self.force,
        })
    }
}
