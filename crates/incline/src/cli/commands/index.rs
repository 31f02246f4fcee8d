//! Implements `incline index`.

use std::process::ExitCode;

use incline_trie::build_trie;
use serde::Serialize;

use crate::cli::args::IndexCommand;
use crate::cli::commands::shared;

/// Statistics reported after a build.
#[derive(Debug, Serialize)]
struct IndexReport {
    /// Normalized search roots that were walked.
    roots: Vec<String>,
    /// Number of directory nodes in the trie, including the root.
    directories: usize,
    /// Number of indexed file entries (duplicates counted).
    files: usize,
}

/// Runs the `index` command: builds the trie and reports statistics.
pub fn run(cmd: &IndexCommand) -> ExitCode {
    let ctx = match shared::resolve_context(&cmd.context) {
        Ok(ctx) => ctx,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    let trie = build_trie(&ctx.key, &ctx.ignore_dirs);
    let report = IndexReport {
        roots: ctx
            .key
            .roots
            .iter()
            .map(|r| r.display().to_string())
            .collect(),
        directories: trie.node_count(),
        files: trie.file_count(),
    };

    if cmd.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize report: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("Roots:");
    if report.roots.is_empty() {
        println!("  (none)");
    } else {
        for root in &report.roots {
            println!("  {root}");
        }
    }
    println!();
    println!(
        "Indexed {} files across {} directories.",
        report.files, report.directories
    );
    ExitCode::SUCCESS
}
