//! # Alphabet
//!
//! The 56-symbol alphabet identifiers are drawn from: 8 digits, 24 uppercase
//! letters and the same 24 letters in lowercase. Characters that are easily
//! mistaken for one another (`0`/`O`, `1`/`I`) are left out.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{collections::HashSet, fmt};

use crate::{
    constants::{DIGITS, DIGIT_COUNT, EXCLUDED_CHARS, LETTERS, LETTER_COUNT, SYMBOL_COUNT},
    error::{Error, Result},
};

/// Built-in alphabet, assembled at compile time.
static STANDARD: Alphabet = Alphabet {
    symbols: build_standard(),
};

/// Concatenates digits, uppercase letters and lowercase letters.
/// Wrong literal sizes fail the build.
const fn build_standard() -> [u8; SYMBOL_COUNT] {
    let digits = DIGITS.as_bytes();
    let letters = LETTERS.as_bytes();
    assert!(digits.len() == DIGIT_COUNT, "DIGITS must hold 8 symbols");
    assert!(letters.len() == LETTER_COUNT, "LETTERS must hold 24 symbols");

    let mut symbols = [0u8; SYMBOL_COUNT];
    let mut i = 0;
    while i < DIGIT_COUNT {
        symbols[i] = digits[i];
        i += 1;
    }
    let mut j = 0;
    while j < LETTER_COUNT {
        symbols[DIGIT_COUNT + j] = letters[j];
        symbols[DIGIT_COUNT + LETTER_COUNT + j] = letters[j].to_ascii_lowercase();
        j += 1;
    }
    symbols
}

/// An ordered, immutable set of exactly [`SYMBOL_COUNT`] ASCII symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; SYMBOL_COUNT],
}

impl Alphabet {
    /// Returns the built-in alphabet
    /// (`23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghjklmnpqrstuvwxyz`).
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Builds an alphabet from a digit string and an uppercase letter string.
    ///
    /// The letters are appended twice: once as given and once lowercased.
    /// The result is validated before it is returned.
    pub fn from_parts(digits: &str, letters: &str) -> Result<Self> {
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::alphabet(format!(
                "digit part contains non-digit characters: {digits:?}"
            )));
        }
        if !letters.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(Error::alphabet(format!(
                "letter part must be uppercase ASCII: {letters:?}"
            )));
        }

        let combined: Vec<u8> = digits
            .bytes()
            .chain(letters.bytes())
            .chain(letters.bytes().map(|b| b.to_ascii_lowercase()))
            .collect();

        let found = combined.len();
        let symbols: [u8; SYMBOL_COUNT] = combined.try_into().map_err(|_| {
            Error::alphabet(format!("expected {SYMBOL_COUNT} symbols, found {found}"))
        })?;

        let alphabet = Self { symbols };
        alphabet.validate()?;
        Ok(alphabet)
    }

    /// Checks the alphabet invariants: class sizes, uniqueness, and that no
    /// excluded character is present.
    pub fn validate(&self) -> Result<()> {
        let digits = self.symbols.iter().filter(|b| b.is_ascii_digit()).count();
        let upper = self.symbols.iter().filter(|b| b.is_ascii_uppercase()).count();
        let lower = self.symbols.iter().filter(|b| b.is_ascii_lowercase()).count();
        if (digits, upper, lower) != (DIGIT_COUNT, LETTER_COUNT, LETTER_COUNT) {
            return Err(Error::alphabet(format!(
                "expected {DIGIT_COUNT} digits, {LETTER_COUNT} uppercase and {LETTER_COUNT} \
                 lowercase letters, found {digits}, {upper} and {lower}"
            )));
        }

        let mut seen = HashSet::with_capacity(SYMBOL_COUNT);
        if let Some(dup) = self.symbols.iter().find(|b| !seen.insert(**b)) {
            return Err(Error::alphabet(format!(
                "symbol {:?} appears more than once",
                char::from(*dup)
            )));
        }

        if let Some(bad) = self.chars().find(|c| EXCLUDED_CHARS.contains(c)) {
            return Err(Error::alphabet(format!(
                "symbol {bad:?} is excluded as ambiguous"
            )));
        }

        Ok(())
    }

    /// Returns the symbol at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied().map(char::from)
    }

    /// Whether `c` is one of the symbols.
    pub fn contains(&self, c: char) -> bool {
        self.position(c).is_some()
    }

    /// Index of `c` within the alphabet.
    pub fn position(&self, c: char) -> Option<usize> {
        u8::try_from(c)
            .ok()
            .and_then(|b| self.symbols.iter().position(|s| *s == b))
    }

    /// Iterates the symbols in order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied().map(char::from)
    }

    /// Number of symbols (always [`SYMBOL_COUNT`]).
    #[allow(clippy::unused_self)]
    pub const fn len(&self) -> usize {
        SYMBOL_COUNT
    }

    /// Always false; an alphabet holds [`SYMBOL_COUNT`] symbols.
    #[allow(clippy::unused_self)]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars().try_for_each(|c| fmt::Write::write_char(f, c))
    }
}
