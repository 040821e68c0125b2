//! # glyphid CLI
//!
//! Command-line interface for generating readable random identifiers.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::{builder::RangedU64ValueParser, Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use glyphid::{
    commands::{self, AlphabetArgs, GenerateArgs},
    ui,
};

const GLOBAL_HELP: &str = "\
Environment:
  length             Identifier length when --length is not given (default: 16).
                     Values that are not positive integers are ignored with a warning.

Alphabet (56 symbols):
  23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghjklmnpqrstuvwxyz

Examples:
  glyphid                        Print one 16-character identifier
  glyphid --length 8             Print an 8-character identifier
  length=24 glyphid              Same, configured through the environment
  glyphid --count 5              Print five identifiers, one per line
  glyphid alphabet --weights     Show how many byte values map to each symbol";

#[derive(Parser)]
#[command(name = "glyphid")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Generate human-friendly random identifiers")]
#[command(
    long_about = "glyphid prints random identifiers drawn from a 56-symbol alphabet that \
omits look-alike characters (0, 1, I, O).

Each symbol is chosen by scaling one byte from the operating system's secure random \
number generator onto the alphabet. 256 byte values do not split evenly into 56 \
symbols, so some symbols are reached by five byte values and others by four. Run \
'glyphid alphabet --weights' to see the exact distribution."
)]
#[command(after_help = GLOBAL_HELP)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateOpts,
}

#[derive(Args)]
struct GenerateOpts {
    /// Number of symbols per identifier
    #[arg(
        short = 'n',
        long,
        value_name = "N",
        help = "Number of symbols per identifier (overrides the length environment variable)"
    )]
    length: Option<usize>,

    /// Number of identifiers to print
    #[arg(
        short,
        long,
        value_name = "COUNT",
        default_value_t = 1,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
        help = "Number of identifiers to print, one per line (at least 1)"
    )]
    count: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the symbol alphabet
    #[command(
        long_about = "Print the 56-symbol alphabet on a single line.\n\n\
With --weights, print one line per symbol with the number of byte values (out of 256) \
that map to it. 32 symbols have weight 5 and 24 have weight 4.",
        after_help = "Examples:\n  \
glyphid alphabet                  Print the alphabet\n  \
glyphid alphabet --weights        Print symbol and weight per line"
    )]
    Alphabet {
        /// Show per-symbol byte weights
        #[arg(long, help = "Print each symbol with its byte weight")]
        weights: bool,
    },

    /// Generate shell completions
    #[command(
        after_help = "Examples:\n  \
glyphid completions bash > ~/.local/share/bash-completion/completions/glyphid\n  \
glyphid completions zsh > ~/.zfunc/_glyphid"
    )]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        ui::print_error(&err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => commands::generate(&GenerateArgs {
            length: cli.generate.length,
            count: cli.generate.count,
        }),

        Some(Commands::Alphabet { weights }) => commands::alphabet(AlphabetArgs { weights }),

        Some(Commands::Completions { shell }) => {
            commands::completions(shell, &mut Cli::command())
        }
    }
}
