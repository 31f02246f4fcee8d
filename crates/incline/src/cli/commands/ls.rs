//! Implements `incline ls`.

use std::process::ExitCode;

use incline_trie::build_trie;

use crate::cli::args::LsCommand;
use crate::cli::commands::shared;

/// Runs the `ls` command: lists indexed relative paths, one per line.
pub fn run(cmd: &LsCommand) -> ExitCode {
    let ctx = match shared::resolve_context(&cmd.context) {
        Ok(ctx) => ctx,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    let trie = build_trie(&ctx.key, &ctx.ignore_dirs);
    let mut paths = trie.paths();
    if let Some(prefix) = &cmd.prefix {
        paths.retain(|path| path.starts_with(prefix.as_str()));
    }

    for path in paths {
        println!("{path}");
    }
    ExitCode::SUCCESS
}
