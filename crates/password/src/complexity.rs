//! Complexity scoring for generated passwords.
//!
//! Four independent metrics are computed from the password text
//! and combined into a weighted score capped at [MAX_SCORE].
//! Every metric is total: empty input yields `0.0`.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Upper bound of the composite score.
pub const MAX_SCORE: f64 = 10.0;

/// Length at which the length component of the score saturates.
pub const SCORE_LENGTH: f64 = 25.0;

const ENTROPY_WEIGHT: f64 = 0.30;
const COMPRESSION_WEIGHT: f64 = 0.25;
const PATTERN_WEIGHT: f64 = 0.20;
const DIVERSITY_WEIGHT: f64 = 0.15;
const LENGTH_WEIGHT: f64 = 0.10;

/// Shortest substring examined for pattern complexity.
const MIN_PATTERN: usize = 2;
/// Longest substring examined for pattern complexity.
const MAX_PATTERN: usize = 4;

/// Result of analyzing the complexity of a password.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityResult {
    /// Length of the password in bytes.
    pub length: usize,
    /// Shannon entropy in bits per character.
    pub entropy: f64,
    /// Run-length compression ratio between `0.0` and `1.0`.
    pub compression_ratio: f64,
    /// Ratio of unique substrings between `0.0` and `1.0`.
    pub pattern_complexity: f64,
    /// Fraction of character classes present.
    pub diversity: f64,
    /// Weighted composite score between `0.0` and [MAX_SCORE].
    pub score: f64,
}

/// Analyze the complexity of a password.
pub fn analyze(password: &str) -> ComplexityResult {
    let length = password.len();
    let entropy = shannon_entropy(password);
    let compression_ratio = compression_ratio(password);
    let pattern_complexity = pattern_complexity(password);
    let diversity = character_diversity(password);

    let score = (entropy * ENTROPY_WEIGHT)
        + (compression_ratio * COMPRESSION_WEIGHT)
        + (pattern_complexity * PATTERN_WEIGHT)
        + (diversity * DIVERSITY_WEIGHT)
        + ((length as f64 / SCORE_LENGTH).min(1.0) * LENGTH_WEIGHT);

    ComplexityResult {
        length,
        entropy,
        compression_ratio,
        pattern_complexity,
        diversity,
        score: score.min(MAX_SCORE),
    }
}

/// Shannon entropy of the byte values in a string,
/// in bits per character.
pub fn shannon_entropy(value: &str) -> f64 {
    if value.is_empty() {
        return 0.0;
    }

    let mut counts = [0usize; 256];
    for byte in value.bytes() {
        counts[byte as usize] += 1;
    }

    let len = value.len() as f64;
    counts
        .iter()
        .filter(|count| **count > 0)
        .map(|count| {
            let probability = *count as f64 / len;
            -probability * probability.log2()
        })
        .sum()
}

/// Approximate how poorly a string compresses with run-length
/// encoding.
///
/// A run of one byte costs one unit and any longer run costs two
/// units; the ratio is `1 - units / length` so strings without
/// repeated neighbours score `0.0` and long runs approach `1.0`.
pub fn compression_ratio(value: &str) -> f64 {
    let bytes = value.as_bytes();
    if bytes.is_empty() {
        return 0.0;
    }

    let compressed: usize = bytes
        .chunk_by(|a, b| a == b)
        .map(|run| if run.len() > 1 { 2 } else { 1 })
        .sum();

    1.0 - (compressed as f64 / bytes.len() as f64)
}

/// Ratio of first occurrences among all substrings of two to
/// four bytes.
///
/// Substrings are only ever equal to substrings of the same
/// length so a single set tracks every length.
pub fn pattern_complexity(value: &str) -> f64 {
    let bytes = value.as_bytes();
    if bytes.len() < MIN_PATTERN {
        return 0.0;
    }

    let mut seen: HashSet<&[u8]> = HashSet::new();
    let mut total = 0usize;
    for size in MIN_PATTERN..=MAX_PATTERN.min(bytes.len()) {
        for window in bytes.windows(size) {
            total += 1;
            seen.insert(window);
        }
    }

    if total == 0 {
        return 0.0;
    }
    seen.len() as f64 / total as f64
}

/// Fraction of the four character classes present in a string.
///
/// The classes are lowercase letters, uppercase letters, digits
/// and symbols, where a symbol is anything else that is not
/// whitespace.
pub fn character_diversity(value: &str) -> f64 {
    let (mut lower, mut upper, mut digit, mut symbol) =
        (false, false, false, false);
    for c in value.chars() {
        if c.is_ascii_lowercase() {
            lower = true;
        } else if c.is_ascii_uppercase() {
            upper = true;
        } else if c.is_ascii_digit() {
            digit = true;
        } else if !c.is_whitespace() {
            symbol = true;
        }
    }

    let classes = [lower, upper, digit, symbol]
        .into_iter()
        .filter(|present| *present)
        .count();
    classes as f64 / 4.0
}
