//! # glyphid
//!
//! Human-friendly random identifiers.
//!
//! Identifiers are drawn from a 56-symbol alphabet of digits and letters that
//! leaves out look-alike characters (`0`, `1`, `I`, `O`), so they survive
//! being read aloud, retyped, or printed in an unfriendly font.
//!
//! ## Features
//!
//! - **Secure**: Bytes come from the operating system CSPRNG
//! - **Readable**: No `0`/`O` or `1`/`I` confusion
//! - **Configurable**: Length via `--length` or the `length` environment variable
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod id;
pub mod ui;

pub use config::{Config, LengthSetting};
pub use error::{Error, Result};
pub use id::{
    generate, generate_with, Alphabet, EntropySource, OsEntropy, SeededEntropy, SymbolMapper,
};
