//! # Commands
//!
//! CLI command implementations for glyphid.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod alphabet;
pub mod completions;
pub mod generate;

pub use self::{
    alphabet::{execute as alphabet, AlphabetArgs},
    completions::execute as completions,
    generate::{execute as generate, GenerateArgs},
};
