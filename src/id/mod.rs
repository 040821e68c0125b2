//! # ID Generation
//!
//! Maps random bytes onto the 56-symbol [`Alphabet`].
//!
//! Each byte `v` selects index `floor(v * 56 / 256)`. 256 does not divide
//! evenly by 56, so 32 symbols are reached by 5 byte values and 24 symbols
//! by 4. Every symbol therefore has probability 4/256 or 5/256 instead of
//! exactly 1/56. This bias is known and accepted; see [`SymbolMapper::weights`].
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod alphabet;
pub mod entropy;

use std::io;

pub use self::{
    alphabet::Alphabet,
    entropy::{EntropySource, OsEntropy, SeededEntropy},
};
use crate::{
    constants::{BYTE_RANGE, SYMBOL_COUNT},
    error::{Error, Result},
};

/// Generates an identifier of `length` symbols from the OS random source.
pub fn generate(length: usize) -> Result<String> {
    generate_with(&mut OsEntropy, length)
}

/// Generates an identifier of `length` symbols from `source`.
pub fn generate_with<E: EntropySource + ?Sized>(source: &mut E, length: usize) -> Result<String> {
    SymbolMapper::standard().generate(source, length)
}

/// Byte-to-symbol transform over a borrowed alphabet.
#[derive(Debug, Clone, Copy)]
pub struct SymbolMapper<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> SymbolMapper<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Scales a byte to an alphabet index in `0..56`.
    pub const fn index_of(byte: u8) -> usize {
        byte as usize * SYMBOL_COUNT / BYTE_RANGE
    }

    pub fn map_byte(&self, byte: u8) -> char {
        self.alphabet
            .get(Self::index_of(byte))
            .unwrap_or_else(|| unreachable!("index_of is always below SYMBOL_COUNT"))
    }

    /// Maps each byte to one symbol, preserving order.
    pub fn map_bytes(&self, bytes: &[u8]) -> String {
        bytes.iter().map(|b| self.map_byte(*b)).collect()
    }

    /// Draws `length` bytes from `source` in one request and maps them.
    ///
    /// A failing source, or a length too large to buffer, yields an error
    /// and no partial identifier.
    pub fn generate<E: EntropySource + ?Sized>(
        &self,
        source: &mut E,
        length: usize,
    ) -> Result<String> {
        if length == 0 {
            return Ok(String::new());
        }

        let mut bytes: Vec<u8> = Vec::new();
        bytes
            .try_reserve_exact(length)
            .map_err(|e| Error::entropy(length, io::Error::new(io::ErrorKind::OutOfMemory, e)))?;
        bytes.resize(length, 0);
        source.fill(&mut bytes)?;
        Ok(self.map_bytes(&bytes))
    }

    /// Generates `count` identifiers. Either all succeed or none are returned.
    pub fn generate_many<E: EntropySource + ?Sized>(
        &self,
        source: &mut E,
        length: usize,
        count: usize,
    ) -> Result<Vec<String>> {
        (0..count).map(|_| self.generate(source, length)).collect()
    }

    /// Number of byte values that map to each symbol (4 or 5, summing to 256).
    pub fn weights() -> [usize; SYMBOL_COUNT] {
        let mut weights = [0; SYMBOL_COUNT];
        for byte in 0..=u8::MAX {
            weights[Self::index_of(byte)] += 1;
        }
        weights
    }
}

impl SymbolMapper<'static> {
    /// Mapper over the built-in alphabet.
    pub fn standard() -> Self {
        Self::new(Alphabet::standard())
    }
}
