//! Command-line interface for the `incline` include-completion tool.

use std::process::ExitCode;

use clap::Parser;

mod cli;

use cli::args::{Cli, Commands};
use cli::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Complete(cmd) => commands::complete::run(&cmd),
        Commands::Index(cmd) => commands::index::run(&cmd),
        Commands::Ls(cmd) => commands::ls::run(&cmd),
        Commands::Init(cmd) => commands::init::run(&cmd),
    }
}
