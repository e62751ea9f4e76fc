//! Assemble the base string of a password from word list tokens.
use crate::{shuffle::shuffle_indices, Error, Result, WordList, TARGET};
use rand::Rng;

/// Fewest tokens joined into a base string.
pub const MIN_TOKENS: usize = 2;

/// Most tokens joined into a base string.
pub const MAX_TOKENS: usize = 6;

/// Base strings shorter than this are topped up with more tokens.
pub const MIN_ASSEMBLED: usize = 15;

/// Number of extra tokens used to top up a short base string.
pub const TOP_UP_TOKENS: usize = 5;

/// Choose how many tokens to join, uniformly from
/// [MIN_TOKENS] to [MAX_TOKENS] inclusive.
pub fn random_token_count<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.gen_range(MIN_TOKENS..=MAX_TOKENS)
}

/// Join `count` random tokens from the word list into a
/// lowercase string without spaces.
///
/// Characters stop being appended once the output reaches
/// `max_length - 1`; when the result is shorter than
/// [MIN_ASSEMBLED] the indices are shuffled again and up to
/// [TOP_UP_TOKENS] more tokens are appended, reshuffling when a
/// small list runs out of tokens. The result never exceeds
/// `max_length` characters.
///
/// An empty word list is an error, as is a list whose tokens
/// only contain spaces.
pub fn assemble_tokens<L, R>(
    list: &L,
    count: usize,
    max_length: usize,
    rng: &mut R,
) -> Result<String>
where
    L: WordList + ?Sized,
    R: Rng + ?Sized,
{
    let tokens = list.tokens();
    if tokens.is_empty() {
        return Err(Error::EmptyWordList);
    }

    let mut indices: Vec<usize> = (0..tokens.len()).collect();
    shuffle_indices(&mut indices, rng);

    let cap = max_length.saturating_sub(1);
    let mut output = Joined::new(cap);
    for index in indices.iter().take(count.min(tokens.len())) {
        if output.is_full() {
            break;
        }
        output.append(tokens[*index].as_ref());
    }

    if output.len < MIN_ASSEMBLED {
        // Lists shorter than the top up are reshuffled and reused.
        let mut added = 0;
        while added < TOP_UP_TOKENS && output.len < max_length {
            shuffle_indices(&mut indices, rng);
            for index in indices.iter().take(TOP_UP_TOKENS - added) {
                if output.len >= max_length {
                    break;
                }
                output.append(tokens[*index].as_ref());
                added += 1;
            }
        }
    }

    let mut password = output.value;
    if let Some((offset, _)) = password.char_indices().nth(max_length) {
        password.truncate(offset);
    }

    if password.is_empty() {
        return Err(Error::EmptyPassword);
    }

    tracing::trace!(
        target: TARGET,
        tokens = count,
        length = password.chars().count(),
        "assemble_tokens"
    );

    Ok(password)
}

/// Output buffer that tracks its length in characters.
struct Joined {
    value: String,
    len: usize,
    cap: usize,
}

impl Joined {
    fn new(cap: usize) -> Self {
        Self {
            value: String::with_capacity(cap + 1),
            len: 0,
            cap,
        }
    }

    fn is_full(&self) -> bool {
        self.len >= self.cap
    }

    fn append(&mut self, token: &str) {
        for c in token.chars() {
            if self.is_full() {
                break;
            }
            if c != ' ' {
                for lower in c.to_lowercase() {
                    self.value.push(lower);
                    self.len += 1;
                }
            }
        }
    }
}
