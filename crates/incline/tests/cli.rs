//! CLI integration tests for incline commands.
//!
//! These tests exercise the binary end-to-end against temporary include
//! trees, focusing on exit codes and candidate ordering.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get an incline command with HOME and cwd isolated to `dir`.
fn incline_in(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("incline").unwrap();
    cmd.env("HOME", dir);
    cmd.current_dir(dir);
    cmd
}

/// Creates a small include tree under `dir` and returns the root.
///
/// Layout:
/// ```text
/// include/
///   stdio.h
///   Zcustom.h
///   sys/socket.h
///   sys/types.h
///   .git/sneaky.h
/// ```
fn include_tree(dir: &Path) -> std::path::PathBuf {
    let root = dir.join("include");
    fs::create_dir_all(root.join("sys")).unwrap();
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::write(root.join("stdio.h"), "").unwrap();
    fs::write(root.join("Zcustom.h"), "").unwrap();
    fs::write(root.join("sys/socket.h"), "").unwrap();
    fs::write(root.join("sys/types.h"), "").unwrap();
    fs::write(root.join(".git/sneaky.h"), "").unwrap();
    root
}

mod complete {
    use super::*;

    #[test]
    fn lists_files_before_directories() {
        let dir = temp_dir();
        let root = include_tree(dir.path());

        let output = incline_in(dir.path())
            .args(["complete", "-t", "cpp", "--line", "#include <"])
            .arg(&root)
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        let stdio = stdout.find("stdio.h").unwrap();
        let zcustom = stdout.find("Zcustom.h").unwrap();
        let sys = stdout.find("sys/").unwrap();
        // Swapcase ordering puts lowercase names first; directories last.
        assert!(stdio < zcustom, "files out of order: {stdout}");
        assert!(zcustom < sys, "directory listed before files: {stdout}");
    }

    #[test]
    fn descends_into_partial_path() {
        let dir = temp_dir();
        let root = include_tree(dir.path());

        incline_in(dir.path())
            .args(["complete", "-t", "cpp", "--line", "#include <sys/"])
            .arg(&root)
            .assert()
            .success()
            .stdout(predicate::str::contains("socket.h"))
            .stdout(predicate::str::contains("types.h"))
            .stdout(predicate::str::contains("stdio.h").not());
    }

    #[test]
    fn closed_line_prints_no_candidates() {
        let dir = temp_dir();
        let root = include_tree(dir.path());

        incline_in(dir.path())
            .args(["complete", "-t", "cpp", "--line", "#include <stdio.h>"])
            .arg(&root)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn non_directive_line_prints_no_candidates() {
        let dir = temp_dir();
        let root = include_tree(dir.path());

        incline_in(dir.path())
            .args(["complete", "-t", "cpp", "--line", "int main() {"])
            .arg(&root)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn ignored_directories_never_surface() {
        let dir = temp_dir();
        let root = include_tree(dir.path());

        incline_in(dir.path())
            .args(["complete", "-t", "cpp", "--line", "#include <"])
            .arg(&root)
            .assert()
            .success()
            .stdout(predicate::str::contains("sneaky").not())
            .stdout(predicate::str::contains(".git").not());
    }

    #[test]
    fn json_output_is_parseable() {
        let dir = temp_dir();
        let root = include_tree(dir.path());

        let output = incline_in(dir.path())
            .args(["complete", "-t", "cpp", "--line", "#include <sys/", "--json"])
            .arg(&root)
            .output()
            .unwrap();

        assert!(output.status.success());
        let candidates: Vec<serde_json::Value> =
            serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0]["word"], "socket.h");
        assert_eq!(candidates[0]["kind"], "file");
    }

    #[test]
    fn unresolvable_path_yields_empty_success() {
        let dir = temp_dir();
        let root = include_tree(dir.path());

        incline_in(dir.path())
            .args(["complete", "-t", "cpp", "--line", "#include <nosuch/dir/"])
            .arg(&root)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn offset_flag_prints_completion_offset() {
        let dir = temp_dir();
        let root = include_tree(dir.path());

        // Last '/' is at byte 13; completion starts at 14.
        incline_in(dir.path())
            .args([
                "complete", "-t", "cpp", "--line", "#include <sys/soc", "--offset",
            ])
            .arg(&root)
            .assert()
            .success()
            .stdout("14\n");
    }

    #[test]
    fn unknown_filetype_fails() {
        let dir = temp_dir();

        incline_in(dir.path())
            .args(["complete", "-t", "fortran", "--line", "#include <"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no profile"));
    }

    #[test]
    fn roots_can_come_from_config_file() {
        let dir = temp_dir();
        let root = include_tree(dir.path());

        let config = format!(
            "[filetypes.cpp]\nroots = [\"{}\"]\n",
            root.display()
        );
        fs::write(dir.path().join(".incline.toml"), config).unwrap();

        incline_in(dir.path())
            .args(["complete", "-t", "cpp", "--line", "#include <"])
            .assert()
            .success()
            .stdout(predicate::str::contains("stdio.h"));
    }
}

mod index {
    use super::*;

    #[test]
    fn reports_file_and_directory_counts() {
        let dir = temp_dir();
        let root = include_tree(dir.path());

        // 4 files outside .git; root node + sys = 2 directories.
        incline_in(dir.path())
            .args(["index", "-t", "cpp"])
            .arg(&root)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Indexed 4 files across 2 directories.",
            ));
    }

    #[test]
    fn json_report_carries_roots() {
        let dir = temp_dir();
        let root = include_tree(dir.path());

        let output = incline_in(dir.path())
            .args(["index", "-t", "cpp", "--json"])
            .arg(&root)
            .output()
            .unwrap();

        assert!(output.status.success());
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["files"], 4);
        assert_eq!(report["directories"], 2);
        assert_eq!(report["roots"][0], root.display().to_string());
    }

    #[test]
    fn placeholder_roots_contribute_nothing() {
        let dir = temp_dir();

        incline_in(dir.path())
            .args(["index", "-t", "cpp", "--", ".", "*", "**"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Indexed 0 files across 1 directories.",
            ));
    }
}

mod ls {
    use super::*;

    #[test]
    fn lists_relative_paths() {
        let dir = temp_dir();
        let root = include_tree(dir.path());

        incline_in(dir.path())
            .args(["ls", "-t", "cpp"])
            .arg(&root)
            .assert()
            .success()
            .stdout(predicate::str::contains("stdio.h"))
            .stdout(predicate::str::contains("sys/socket.h"))
            .stdout(predicate::str::contains("sys/types.h"));
    }

    #[test]
    fn prefix_filters_listing() {
        let dir = temp_dir();
        let root = include_tree(dir.path());

        incline_in(dir.path())
            .args(["ls", "-t", "cpp", "--prefix", "sys/"])
            .arg(&root)
            .assert()
            .success()
            .stdout(predicate::str::contains("sys/socket.h"))
            .stdout(predicate::str::contains("stdio.h").not());
    }

    #[test]
    fn merged_roots_share_one_tree() {
        let dir = temp_dir();
        let first = dir.path().join("first");
        let second = dir.path().join("second");
        fs::create_dir_all(first.join("sys")).unwrap();
        fs::create_dir_all(second.join("sys")).unwrap();
        fs::write(first.join("sys/a.h"), "").unwrap();
        fs::write(second.join("sys/b.h"), "").unwrap();

        incline_in(dir.path())
            .args(["ls", "-t", "cpp"])
            .arg(&first)
            .arg(&second)
            .assert()
            .success()
            .stdout(predicate::str::contains("sys/a.h"))
            .stdout(predicate::str::contains("sys/b.h"));
    }
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let dir = temp_dir();

        incline_in(dir.path())
            .arg("init")
            .assert()
            .success()
            .stdout(predicate::str::contains("Created"));

        let config = dir.path().join(".incline.toml");
        assert!(config.is_file());
        let content = fs::read_to_string(config).unwrap();
        assert!(content.contains("[settings]"));
    }

    #[test]
    fn refuses_overwrite_without_force() {
        let dir = temp_dir();
        fs::write(dir.path().join(".incline.toml"), "# existing\n").unwrap();

        incline_in(dir.path())
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn force_overwrites_existing_config() {
        let dir = temp_dir();
        fs::write(dir.path().join(".incline.toml"), "# existing\n").unwrap();

        incline_in(dir.path())
            .args(["init", "--force"])
            .assert()
            .success();

        let content = fs::read_to_string(dir.path().join(".incline.toml")).unwrap();
        assert!(content.contains("incline configuration"));
    }
}
