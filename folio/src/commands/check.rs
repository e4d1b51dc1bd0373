use clap::Args;
use eyre::Result;
use folio_loader::Synthesizer;

use crate::{
    ops::{self, Project},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self, project: &Project) -> Result<()> {
        let report = ops::check(project, &Synthesizer::new());
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
