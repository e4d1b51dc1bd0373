mod build;
mod check;
mod completions;
mod list;
mod synth;

use std::path::PathBuf;

use build::BuildCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use list::ListCommand;
use synth::SynthCommand;

use crate::{logger::init_logger, ops::Project};

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for folio_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for folio_loader::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Generate style guide modules from component sources")]
pub(crate) struct Cli {
    /// Path to folio.toml
    #[arg(short, long, global = true, default_value = "folio.toml")]
    config: PathBuf,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        init_logger(self.verbose, self.quiet);

        match &self.command {
            Commands::Check(cmd) => cmd.run(&self.project()),
            Commands::List(cmd) => cmd.run(&self.project()),
            Commands::Synth(cmd) => cmd.run(&self.project()),
            Commands::Build(cmd) => cmd.run(&self.project()),
            Commands::Completions(cmd) => cmd.run(),
        }
    }

    fn project(&self) -> Project {
        Project::open(&self.config).unwrap_or_exit()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate folio.toml and the components it points at
    Check(CheckCommand),

    /// List discovered components
    List(ListCommand),

    /// Print the descriptor module for one component
    Synth(SynthCommand),

    /// Generate descriptor modules for every component
    Build(BuildCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
