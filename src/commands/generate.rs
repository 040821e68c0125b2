//! # Generate Command
//!
//! Prints one or more identifiers, one per line.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::{
    config::Config,
    id::{Alphabet, EntropySource, OsEntropy, SymbolMapper},
    ui,
};

/// Arguments for the generate command
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Explicit length, overriding the environment
    pub length: Option<usize>,
    /// Number of identifiers to print
    pub count: usize,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            length: None,
            count: 1,
        }
    }
}

/// Executes the generate command.
pub fn execute(args: &GenerateArgs) -> Result<()> {
    let config = Config::from_env().with_override(args.length);
    ui::print_warnings(&config.warnings);

    let ids = generate_ids(&config, args.count, &mut OsEntropy)?;

    // Output only after every identifier exists, so failures leave stdout empty
    let mut stdout = io::stdout().lock();
    for id in &ids {
        writeln!(stdout, "{id}")?;
    }
    stdout.flush()?;

    Ok(())
}

/// Generates `count` identifiers of the configured length from `source`.
pub fn generate_ids<E: EntropySource + ?Sized>(
    config: &Config,
    count: usize,
    source: &mut E,
) -> Result<Vec<String>> {
    let alphabet = Alphabet::standard();
    alphabet
        .validate()
        .context("Built-in alphabet failed validation")?;

    SymbolMapper::new(alphabet)
        .generate_many(source, config.length, count)
        .context("Failed to generate identifier")
}
