//! Clap argument definitions for the `incline` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "incline")]
#[command(about = "Include-path indexing and completion for editor tooling")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared context selection flags for index-backed commands.
#[derive(Args, Debug, Clone)]
pub struct ContextArgs {
    /// Filetype whose profile to use (c, cpp, cuda, or a configured one)
    #[arg(short = 't', long)]
    pub filetype: String,

    /// Additional search roots, appended after the profile's roots
    pub roots: Vec<PathBuf>,
}

/// Arguments for `incline complete`.
#[derive(Args, Debug, Clone)]
pub struct CompleteCommand {
    /// Raw text of the line being completed
    #[arg(short = 'l', long)]
    pub line: String,

    #[command(flatten)]
    /// Context selection.
    pub context: ContextArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Print the completion offset for the line instead of candidates
    #[arg(long)]
    pub offset: bool,
}

/// Arguments for `incline index`.
#[derive(Args, Debug, Clone)]
pub struct IndexCommand {
    #[command(flatten)]
    /// Context selection.
    pub context: ContextArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `incline ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    #[command(flatten)]
    /// Context selection.
    pub context: ContextArgs,

    /// Only list paths under this relative prefix
    #[arg(short = 'p', long)]
    pub prefix: Option<String>,
}

/// Arguments for `incline init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.incline.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `incline` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Complete an include line against the indexed search roots
    #[command(after_help = "\
EXAMPLES:
  incline complete -t cpp --line '#include <sys/' /usr/include
  incline complete -t c --line '#include \"conf' ./include ./src
  incline complete -t cpp --line '#include <vec' --json /usr/include")]
    Complete(CompleteCommand),

    /// Build the include trie and report statistics
    Index(IndexCommand),

    /// List indexed relative paths
    Ls(LsCommand),

    /// Initialize incline configuration in the current directory
    Init(InitCommand),
}
