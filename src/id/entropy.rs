//! # Entropy Sources
//!
//! Byte sources the symbol mapper draws from. Production code only ever uses
//! [`OsEntropy`]; the other sources exist so output can be reproduced.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io;

use rand::{
    rngs::{OsRng, StdRng},
    RngCore, SeedableRng, TryRngCore,
};

use crate::error::{Error, Result};

/// A supplier of random bytes.
///
/// `fill` is all-or-nothing: either every byte of `dest` is written or an
/// error is returned.
pub trait EntropySource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()>;
}

/// The operating system's cryptographically secure random number generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        let requested = dest.len();
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| Error::entropy(requested, io::Error::other(e)))
    }
}

/// Deterministic source backed by a seeded [`StdRng`].
///
/// Used for reproducible samples in tests; never used to mint real identifiers.
#[derive(Debug, Clone)]
pub struct SeededEntropy(StdRng);

impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl EntropySource for SeededEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        self.0.fill_bytes(dest);
        Ok(())
    }
}

/// Replays a fixed byte sequence, consuming it front to back.
impl<'a> EntropySource for &'a [u8] {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        let remaining: &'a [u8] = *self;
        if dest.len() > remaining.len() {
            return Err(Error::entropy(
                dest.len(),
                io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("only {} bytes remain", remaining.len()),
                ),
            ));
        }

        let (head, tail) = remaining.split_at(dest.len());
        dest.copy_from_slice(head);
        *self = tail;
        Ok(())
    }
}
