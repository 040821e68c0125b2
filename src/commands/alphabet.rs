//! # Alphabet Command
//!
//! Prints the symbol alphabet, optionally with the number of byte values
//! that map to each symbol.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fmt::Write as _,
    io::{self, Write},
};

use anyhow::Result;

use crate::id::{Alphabet, SymbolMapper};

/// Arguments for the alphabet command
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphabetArgs {
    /// Print per-symbol byte weights instead of the plain alphabet
    pub weights: bool,
}

/// Executes the alphabet command.
pub fn execute(args: AlphabetArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(render(args).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Formats the command output.
pub fn render(args: AlphabetArgs) -> String {
    let alphabet = Alphabet::standard();
    if !args.weights {
        return format!("{alphabet}\n");
    }

    let mut out = String::new();
    for (symbol, weight) in alphabet.chars().zip(SymbolMapper::weights()) {
        let _ = writeln!(out, "{symbol} {weight}");
    }
    out
}
