//! # Constants
//!
//! Centralized constants for magic values used throughout glyphid.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Alphabet
// =============================================================================

/// Digits used in identifiers. `0` and `1` are omitted to avoid confusion with `O` and `I`.
pub const DIGITS: &str = "23456789";

/// Letters used in identifiers, uppercase. `I` and `O` are omitted (too similar to `1` and `0`).
/// The lowercase half of the alphabet is derived from this string.
pub const LETTERS: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Characters that must never appear in an alphabet.
pub const EXCLUDED_CHARS: &[char] = &['0', '1', 'I', 'O', 'i', 'o'];

/// Number of digit symbols.
pub const DIGIT_COUNT: usize = 8;

/// Number of letters per case.
pub const LETTER_COUNT: usize = 24;

/// Total number of symbols: digits, uppercase letters, lowercase letters.
pub const SYMBOL_COUNT: usize = DIGIT_COUNT + 2 * LETTER_COUNT;

/// Number of distinct values a random byte can take.
pub const BYTE_RANGE: usize = 256;

// =============================================================================
// Configuration
// =============================================================================

/// Identifier length used when nothing (or nothing valid) is configured.
pub const DEFAULT_LENGTH: usize = 16;

/// Environment variable holding the identifier length.
pub const LENGTH_ENV_VAR: &str = "length";
