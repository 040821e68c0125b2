//! # Errors
//!
//! Library error type. Both kinds are fatal: there is no retry and no
//! partial identifier.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io;

use thiserror::Error;

/// Errors produced while building an alphabet or generating identifiers.
#[derive(Debug, Error)]
pub enum Error {
    /// The alphabet does not consist of exactly the expected unique, permitted symbols.
    #[error("alphabet invariant violated: {reason}")]
    AlphabetInvariant { reason: String },

    /// The random source could not supply the requested number of bytes.
    #[error("entropy source failed to supply {requested} bytes")]
    EntropySource {
        requested: usize,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn alphabet(reason: impl Into<String>) -> Self {
        Self::AlphabetInvariant {
            reason: reason.into(),
        }
    }

    pub(crate) const fn entropy(requested: usize, source: io::Error) -> Self {
        Self::EntropySource { requested, source }
    }
}

/// Result alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;
