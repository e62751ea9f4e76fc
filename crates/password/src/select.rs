//! Generate a batch of candidates and select the best one.
use crate::{
    analyze,
    assemble::{assemble_tokens, random_token_count},
    transform, ComplexityResult, Config, Error, Result, WordList,
    NUM_CANDIDATES, TARGET,
};
use rand::Rng;
use serde::Serialize;

/// Generated password and its complexity analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    /// Password text.
    pub text: String,
    /// Complexity of the password.
    pub complexity: ComplexityResult,
}

impl Candidate {
    /// Create a candidate by analyzing the password text.
    pub fn new(text: String) -> Self {
        let complexity = analyze(&text);
        Self { text, complexity }
    }

    /// Composite complexity score.
    pub fn score(&self) -> f64 {
        self.complexity.score
    }
}

/// Batch of candidates and the index of the winner.
#[derive(Debug, Clone, Serialize)]
pub struct Selection {
    candidates: Vec<Candidate>,
    best: usize,
}

impl Selection {
    /// All candidates in the order they were generated.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Index of the winning candidate.
    pub fn best_index(&self) -> usize {
        self.best
    }

    /// Candidate with the highest score.
    pub fn best(&self) -> &Candidate {
        &self.candidates[self.best]
    }

    /// Take the winning candidate.
    pub fn into_best(mut self) -> Candidate {
        self.candidates.swap_remove(self.best)
    }
}

/// Generate a single password.
pub fn generate_password<L, R>(
    list: &L,
    config: &Config,
    rng: &mut R,
) -> Result<String>
where
    L: WordList + ?Sized,
    R: Rng + ?Sized,
{
    let count = random_token_count(rng);
    let base = assemble_tokens(list, count, config.max_length(), rng)?;
    Ok(transform::apply(base, config, rng))
}

/// Generate and analyze a single password.
pub fn generate_candidate<L, R>(
    list: &L,
    config: &Config,
    rng: &mut R,
) -> Result<Candidate>
where
    L: WordList + ?Sized,
    R: Rng + ?Sized,
{
    Ok(Candidate::new(generate_password(list, config, rng)?))
}

/// Index of the candidate with the greatest score.
///
/// Ties keep the earliest candidate. Returns `None` when
/// there are no candidates.
pub fn best_index(candidates: &[Candidate]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        match best {
            Some((_, score)) if candidate.score() <= score => {}
            _ => best = Some((index, candidate.score())),
        }
    }
    best.map(|(index, _)| index)
}

/// Generate [NUM_CANDIDATES] candidates and select the best.
pub fn select<L, R>(
    list: &L,
    config: &Config,
    rng: &mut R,
) -> Result<Selection>
where
    L: WordList + ?Sized,
    R: Rng + ?Sized,
{
    select_batch(list, config, NUM_CANDIDATES, rng)
}

/// Generate `size` candidates and select the best.
pub fn select_batch<L, R>(
    list: &L,
    config: &Config,
    size: usize,
    rng: &mut R,
) -> Result<Selection>
where
    L: WordList + ?Sized,
    R: Rng + ?Sized,
{
    let mut candidates = Vec::with_capacity(size);
    for index in 0..size {
        let candidate = generate_candidate(list, config, rng)?;
        tracing::debug!(
            target: TARGET,
            index = index,
            score = candidate.score(),
            "select::candidate"
        );
        candidates.push(candidate);
    }

    let best = best_index(&candidates).ok_or(Error::EmptyBatch)?;
    tracing::debug!(target: TARGET, best = best, "select::best");
    Ok(Selection { candidates, best })
}
