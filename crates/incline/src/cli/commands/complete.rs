//! Implements `incline complete`.

use std::process::ExitCode;

use comfy_table::{Table, presets};
use incline_complete::{Candidate, Classification, complete, syntax_for};
use incline_trie::TrieCache;

use crate::cli::args::CompleteCommand;
use crate::cli::commands::shared;

/// Runs the `complete` command.
///
/// An ineligible line or an unresolvable partial path is not an error: the
/// command prints no candidates and exits successfully.
pub fn run(cmd: &CompleteCommand) -> ExitCode {
    let ctx = match shared::resolve_context(&cmd.context) {
        Ok(ctx) => ctx,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    let Some(syntax) = syntax_for(&ctx.key.filetype) else {
        eprintln!(
            "error: no include syntax for filetype '{}'",
            ctx.key.filetype
        );
        return ExitCode::FAILURE;
    };

    if cmd.offset {
        if let Classification::Eligible { offset } = syntax.classify(&cmd.line) {
            println!("{offset}");
        }
        return ExitCode::SUCCESS;
    }

    let mut cache = TrieCache::new();
    let trie = cache.ensure_built(&ctx.key, &ctx.ignore_dirs);
    let candidates = complete(syntax, trie, &cmd.line);

    if cmd.json {
        return print_json(&candidates);
    }
    print_table(&candidates);
    ExitCode::SUCCESS
}

/// Prints candidates as JSON.
fn print_json(candidates: &[Candidate]) -> ExitCode {
    match serde_json::to_string_pretty(candidates) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize candidates: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints candidates as a plain table; nothing at all for an empty list.
fn print_table(candidates: &[Candidate]) {
    if candidates.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.load_preset(presets::NOTHING);
    for candidate in candidates {
        table.add_row([candidate.display.as_str(), &candidate.kind.to_string()]);
    }
    println!("{table}");
}
