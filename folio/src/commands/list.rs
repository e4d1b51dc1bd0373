use clap::Args;
use eyre::Result;
use folio_loader::Synthesizer;

use super::UnwrapOrExit;
use crate::{
    ops::{self, Project},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {}

impl ListCommand {
    pub fn run(&self, project: &Project) -> Result<()> {
        let report = ops::list(project, &Synthesizer::new()).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
