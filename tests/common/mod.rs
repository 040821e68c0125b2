//! # Test Helpers
//!
//! Shared utilities for glyphid integration tests. Commands are built with a
//! clean environment so a `length` variable in the developer's shell cannot
//! leak into assertions.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use assert_cmd::Command;
use glyphid::{constants::LENGTH_ENV_VAR, Alphabet};

/// The built-in alphabet as a literal, for cross-checking.
#[allow(dead_code)]
pub const ALPHABET: &str = "23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghjklmnpqrstuvwxyz";

/// Creates a glyphid command with the `length` variable removed.
#[allow(dead_code)]
pub fn glyphid_cmd() -> Command {
    let mut cmd = Command::cargo_bin("glyphid").unwrap();
    cmd.env_remove(LENGTH_ENV_VAR);
    cmd
}

/// Creates a glyphid command with `length` set to `value`.
#[allow(dead_code)]
pub fn glyphid_cmd_with_length(value: &str) -> Command {
    let mut cmd = Command::cargo_bin("glyphid").unwrap();
    cmd.env(LENGTH_ENV_VAR, value);
    cmd
}

/// Returns the stdout lines of a successful run.
#[allow(dead_code)]
pub fn stdout_lines(cmd: &mut Command) -> Vec<String> {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output)
        .expect("stdout is UTF-8")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Checks that every character of `id` belongs to the built-in alphabet.
#[allow(dead_code)]
pub fn is_readable_id(id: &str) -> bool {
    id.chars().all(|c| Alphabet::standard().contains(c))
}
