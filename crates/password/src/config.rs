//! Generation settings.
use crate::{Error, Result};
use serde::Serialize;
use std::ops::RangeInclusive;

/// Minimum number of digits to insert.
pub const MIN_DIGITS: usize = 1;
/// Maximum number of digits to insert.
pub const MAX_DIGITS: usize = 10;
/// Default number of digits to insert.
pub const DEFAULT_DIGITS: usize = 3;

/// Minimum number of symbol substitutions.
pub const MIN_SYMBOLS: usize = 1;
/// Maximum number of symbol substitutions.
pub const MAX_SYMBOLS: usize = 10;
/// Default number of symbol substitutions.
pub const DEFAULT_SYMBOLS: usize = 2;

/// Smallest allowed maximum length.
pub const MIN_LENGTH: usize = 15;
/// Largest allowed maximum length.
pub const MAX_LENGTH: usize = 50;
/// Default maximum length.
pub const DEFAULT_MAX_LENGTH: usize = 25;

/// Number of candidates generated for each selection.
pub const NUM_CANDIDATES: usize = 5;

const DIGITS_RANGE: RangeInclusive<usize> = MIN_DIGITS..=MAX_DIGITS;
const SYMBOLS_RANGE: RangeInclusive<usize> = MIN_SYMBOLS..=MAX_SYMBOLS;
const LENGTH_RANGE: RangeInclusive<usize> = MIN_LENGTH..=MAX_LENGTH;

/// Validated password generation settings.
///
/// Values are guaranteed to lie in their allowed ranges and
/// cannot be changed once the configuration is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    digits: usize,
    symbols: usize,
    max_length: usize,
}

impl Config {
    /// Create a configuration, rejecting values outside
    /// of the allowed ranges.
    pub fn new(
        digits: usize,
        symbols: usize,
        max_length: usize,
    ) -> Result<Self> {
        Ok(Self {
            digits: check("digits", digits, DIGITS_RANGE)?,
            symbols: check("symbols", symbols, SYMBOLS_RANGE)?,
            max_length: check("max_length", max_length, LENGTH_RANGE)?,
        })
    }

    /// Create a configuration clamping each value into
    /// its allowed range.
    pub fn clamped(digits: i64, symbols: i64, max_length: i64) -> Self {
        Self {
            digits: clamp(digits, DIGITS_RANGE),
            symbols: clamp(symbols, SYMBOLS_RANGE),
            max_length: clamp(max_length, LENGTH_RANGE),
        }
    }

    /// Number of random digits inserted into a password.
    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Number of letters replaced with symbols.
    pub fn symbols(&self) -> usize {
        self.symbols
    }

    /// Maximum length of the assembled password.
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            symbols: DEFAULT_SYMBOLS,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

fn check(
    name: &'static str,
    value: usize,
    range: RangeInclusive<usize>,
) -> Result<usize> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(Error::OutOfRange {
            name,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

fn clamp(value: i64, range: RangeInclusive<usize>) -> usize {
    let (min, max) = (*range.start() as i64, *range.end() as i64);
    value.clamp(min, max) as usize
}
