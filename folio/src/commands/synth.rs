use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use folio_loader::Synthesizer;

use super::UnwrapOrExit;
use crate::ops::{self, Project};

#[derive(Args)]
pub struct SynthCommand {
    /// Component source file
    pub component: PathBuf,
}

impl SynthCommand {
    pub fn run(&self, project: &Project) -> Result<()> {
        let component = std::path::absolute(&self.component)
            .wrap_err_with(|| format!("invalid component path {}", self.component.display()))?;

        let source = ops::synth(project, &Synthesizer::new(), &component).unwrap_or_exit();
        print!("{source}");
        Ok(())
    }
}
