mod generate;

use clap::Parser;
use eyre::Result;
use generate::GenerateCommand;

#[derive(Parser)]
#[command(name = "expose")]
#[command(version)]
#[command(about = "Generate the namespace index and metadata files of a GrimoireJS package")]
pub(crate) struct Cli {
    #[command(flatten)]
    generate: GenerateCommand,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        self.generate.run()
    }
}
