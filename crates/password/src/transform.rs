//! Transformations applied to an assembled base string.
//!
//! The pipeline always runs in the same order:
//!
//! 1. [capitalize] a few letters.
//! 2. [insert_digits] at random positions.
//! 3. [truncate] to the configured maximum length.
//! 4. [substitute_symbols] for some of the remaining letters.
//!
//! Truncation happens before substitution so that symbols are
//! never placed past the maximum length.
use crate::{shuffle::shuffle_indices, Config, DIGITS, SYMBOLS};
use rand::Rng;

/// Number of letters converted to uppercase.
pub const CAPITALIZE_COUNT: usize = 3;

/// Upper bound on the number of characters in a password
/// while digits are being inserted.
pub const BUFFER_CAPACITY: usize = 127;

/// Run the complete pipeline over an assembled base string.
pub fn apply<R: Rng + ?Sized>(
    base: String,
    config: &Config,
    rng: &mut R,
) -> String {
    let mut password = base;
    capitalize(&mut password, CAPITALIZE_COUNT, rng);
    insert_digits(&mut password, config.digits(), rng);
    truncate(&mut password, config.max_length());
    substitute_symbols(&mut password, config.symbols(), rng);
    password
}

/// Convert up to `count` randomly chosen letters to uppercase.
pub fn capitalize<R: Rng + ?Sized>(
    password: &mut String,
    count: usize,
    rng: &mut R,
) {
    replace_letters(password, count, rng, |c, _| c.to_ascii_uppercase());
}

/// Insert `count` random digits at random positions.
///
/// Each position is chosen against the current length so later
/// digits may land between earlier ones. Insertion stops once the
/// password reaches [BUFFER_CAPACITY] characters.
pub fn insert_digits<R: Rng + ?Sized>(
    password: &mut String,
    count: usize,
    rng: &mut R,
) {
    let mut chars: Vec<char> = password.chars().collect();
    for _ in 0..count {
        if chars.len() >= BUFFER_CAPACITY {
            break;
        }
        let digit = DIGITS[rng.gen_range(0..DIGITS.len())];
        let position = rng.gen_range(0..=chars.len());
        chars.insert(position, digit);
    }
    *password = chars.into_iter().collect();
}

/// Cut the password to at most `max_length` characters.
pub fn truncate(password: &mut String, max_length: usize) {
    if let Some((offset, _)) = password.char_indices().nth(max_length) {
        password.truncate(offset);
    }
}

/// Replace up to `count` randomly chosen letters with symbols.
pub fn substitute_symbols<R: Rng + ?Sized>(
    password: &mut String,
    count: usize,
    rng: &mut R,
) {
    replace_letters(password, count, rng, |_, rng| {
        SYMBOLS[rng.gen_range(0..SYMBOLS.len())]
    });
}

/// Shuffle the positions of the ASCII letters in the password
/// and replace the first `count` of them.
fn replace_letters<R, F>(
    password: &mut String,
    count: usize,
    rng: &mut R,
    mut replace: F,
) where
    R: Rng + ?Sized,
    F: FnMut(char, &mut R) -> char,
{
    if count == 0 {
        return;
    }

    let mut chars: Vec<char> = password.chars().collect();
    let mut letters: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_ascii_alphabetic())
        .map(|(index, _)| index)
        .collect();

    if letters.is_empty() {
        return;
    }

    shuffle_indices(&mut letters, rng);
    for index in letters.into_iter().take(count) {
        chars[index] = replace(chars[index], rng);
    }
    *password = chars.into_iter().collect();
}
