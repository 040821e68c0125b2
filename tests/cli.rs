//! # CLI Tests
//!
//! End-to-end tests for the glyphid binary: output shape, length
//! configuration precedence, and the alphabet/completions subcommands.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::{glyphid_cmd, glyphid_cmd_with_length, is_readable_id, stdout_lines, ALPHABET};
use predicates::prelude::*;

// =============================================================================
// Default Output
// =============================================================================

#[test]
fn test_default_prints_sixteen_symbols() {
    let lines = stdout_lines(&mut glyphid_cmd());
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 16);
    assert!(is_readable_id(&lines[0]));
}

#[test]
fn test_output_ends_with_newline_and_no_stderr() {
    glyphid_cmd()
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[2-9A-HJ-NP-Za-hj-np-z]{16}\n$").unwrap())
        .stderr(predicate::str::is_empty());
}

// =============================================================================
// Length Configuration
// =============================================================================

#[test]
fn test_env_length_is_used() {
    let lines = stdout_lines(&mut glyphid_cmd_with_length("8"));
    assert_eq!(lines[0].len(), 8);
}

#[test]
fn test_env_length_with_whitespace() {
    let lines = stdout_lines(&mut glyphid_cmd_with_length(" 12 "));
    assert_eq!(lines[0].len(), 12);
}

#[test]
fn test_env_length_invalid_falls_back_with_warning() {
    for value in ["abc", "0", "-3", ""] {
        let assert = glyphid_cmd_with_length(value)
            .assert()
            .success()
            .stderr(predicate::str::contains("warning:"))
            .stderr(predicate::str::contains("using 16"));
        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        assert_eq!(stdout.trim_end().len(), 16, "length={value:?}");
    }
}

#[test]
fn test_flag_overrides_env() {
    let mut cmd = glyphid_cmd_with_length("30");
    cmd.args(["--length", "5"]);
    let lines = stdout_lines(&mut cmd);
    assert_eq!(lines[0].len(), 5);
}

#[test]
fn test_flag_silences_invalid_env_warning() {
    glyphid_cmd_with_length("nope")
        .args(["-n", "6"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_flag_zero_prints_empty_line() {
    glyphid_cmd()
        .args(["--length", "0"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_invalid_flag_is_usage_error() {
    glyphid_cmd()
        .args(["--length", "many"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_oversized_env_length_fails_cleanly() {
    glyphid_cmd_with_length("18446744073709551615")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("entropy source failed to supply"));
}

#[test]
fn test_long_identifier() {
    let lines = stdout_lines(glyphid_cmd().args(["--length", "4096"]));
    assert_eq!(lines[0].len(), 4096);
    assert!(is_readable_id(&lines[0]));
}

// =============================================================================
// Count
// =============================================================================

#[test]
fn test_count_prints_one_per_line() {
    let lines = stdout_lines(glyphid_cmd().args(["--count", "5", "-n", "10"]));
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|l| l.len() == 10 && is_readable_id(l)));
}

#[test]
fn test_count_zero_is_usage_error() {
    glyphid_cmd()
        .args(["--count", "0"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty());
}

// =============================================================================
// Subcommands
// =============================================================================

#[test]
fn test_alphabet_subcommand() {
    glyphid_cmd()
        .arg("alphabet")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{ALPHABET}\n")));
}

#[test]
fn test_alphabet_weights_subcommand() {
    let lines = stdout_lines(glyphid_cmd().args(["alphabet", "--weights"]));
    assert_eq!(lines.len(), 56);

    let total: usize = lines
        .iter()
        .map(|l| l.split_once(' ').unwrap().1.parse::<usize>().unwrap())
        .sum();
    assert_eq!(total, 256);

    let symbols: String = lines.iter().map(|l| &l[..1]).collect();
    assert_eq!(symbols, ALPHABET);
}

#[test]
fn test_completions_subcommand() {
    glyphid_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("glyphid"))
        .stdout(predicate::str::contains("--length"));
}

#[test]
fn test_completions_zsh_lists_subcommands() {
    glyphid_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#compdef glyphid"))
        .stdout(predicate::str::contains("alphabet"));
}

#[test]
fn test_generate_flags_conflict_with_subcommand() {
    glyphid_cmd()
        .args(["--count", "2", "alphabet"])
        .assert()
        .failure();
}
