use clap::Args;
use eyre::Result;
use folio_loader::Synthesizer;

use super::UnwrapOrExit;
use crate::{
    ops::{self, BuildOptions, Project},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BuildCommand {
    /// Preview generated modules without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl BuildCommand {
    /// Run the build command
    pub fn run(&self, project: &Project) -> Result<()> {
        let components = project.components().unwrap_or_exit();
        let opts = BuildOptions {
            dry_run: self.dry_run,
        };
        let report = ops::build(project, &Synthesizer::new(), &components, opts)?;
        report.render(&mut TerminalOutput::new());

        if report.has_failures() {
            std::process::exit(1);
        }
        Ok(())
    }
}
