//! # Configuration
//!
//! Resolves the identifier length from the `--length` flag, the `length`
//! environment variable, or the default, in that order.
//!
//! The environment value is parsed permissively: anything that is not a
//! positive integer falls back to the default. The rejected value is reported
//! as a warning rather than an error.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{env, ffi::OsStr, num::NonZeroUsize};

use crate::constants::{DEFAULT_LENGTH, LENGTH_ENV_VAR};

/// The length as found in the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthSetting {
    /// Variable not set
    Absent,
    /// A positive integer
    Valid(NonZeroUsize),
    /// Set, but not a positive integer (raw value kept for reporting)
    Invalid(String),
}

impl LengthSetting {
    /// Reads the `length` environment variable.
    pub fn from_env() -> Self {
        Self::parse(env::var_os(LENGTH_ENV_VAR).as_deref())
    }

    /// Classifies a raw value. Surrounding whitespace is ignored.
    pub fn parse(raw: Option<&OsStr>) -> Self {
        let Some(raw) = raw else {
            return Self::Absent;
        };
        let Some(text) = raw.to_str() else {
            return Self::Invalid(raw.to_string_lossy().into_owned());
        };

        text.trim()
            .parse::<NonZeroUsize>()
            .map_or_else(|_| Self::Invalid(text.to_string()), Self::Valid)
    }

    /// The length to use: the valid value, or [`DEFAULT_LENGTH`].
    pub const fn resolve(&self) -> usize {
        match self {
            Self::Valid(n) => n.get(),
            Self::Absent | Self::Invalid(_) => DEFAULT_LENGTH,
        }
    }

    /// Message describing the fallback, for invalid settings only.
    pub fn warning(&self) -> Option<String> {
        match self {
            Self::Invalid(raw) => Some(format!(
                "ignoring {LENGTH_ENV_VAR}={raw:?} (not a positive integer), using {DEFAULT_LENGTH}"
            )),
            Self::Absent | Self::Valid(_) => None,
        }
    }
}

/// Effective generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of symbols per identifier
    pub length: usize,

    /// Non-fatal problems found while resolving the configuration
    pub warnings: Vec<String>,
}

impl Config {
    /// Loads configuration from the environment.
    pub fn from_env() -> Self {
        Self::from_setting(&LengthSetting::from_env())
    }

    pub fn from_setting(setting: &LengthSetting) -> Self {
        Self {
            length: setting.resolve(),
            warnings: setting.warning().into_iter().collect(),
        }
    }

    /// Applies an explicit length (from the command line), which takes
    /// precedence over the environment. Environment warnings no longer apply.
    #[must_use]
    pub fn with_override(self, length: Option<usize>) -> Self {
        match length {
            Some(length) => Self {
                length,
                warnings: Vec::new(),
            },
            None => self,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_setting(&LengthSetting::Absent)
    }
}
