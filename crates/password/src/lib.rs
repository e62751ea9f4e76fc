#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Cat name password generation and complexity scoring.
//!
//! Passwords are assembled from a [WordList] of short tokens, run
//! through the [transform] pipeline and ranked by the composite
//! score computed by the [complexity] engine. The [Generator] owns
//! the random source; every randomized function also accepts an
//! injected [rand::Rng] so results are reproducible from a seed.

pub mod assemble;
pub mod complexity;
mod config;
mod error;
mod generator;
pub mod select;
pub mod shuffle;
pub mod transform;
mod word_list;

pub use complexity::{analyze, ComplexityResult};
pub use config::{
    Config, DEFAULT_DIGITS, DEFAULT_MAX_LENGTH, DEFAULT_SYMBOLS, MAX_DIGITS,
    MAX_LENGTH, MAX_SYMBOLS, MIN_DIGITS, MIN_LENGTH, MIN_SYMBOLS,
    NUM_CANDIDATES,
};
pub use error::Error;
pub use generator::{time_seed, Generator};
pub use select::{Candidate, Selection};
pub use word_list::WordList;

pub use rand;

/// Target for tracing macros.
pub(crate) const TARGET: &str = "meowpass::password";

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Numerical digits.
#[doc(hidden)]
pub const DIGITS: &[char] =
    &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Symbols substituted for letters.
#[doc(hidden)]
pub const SYMBOLS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '-', '_', '=', '+',
    '[', ']', '{', ';', ':', '.', '<', '>', '?',
];
