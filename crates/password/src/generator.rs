use crate::{select, Candidate, Config, Result, Selection, WordList};
use rand::{rngs::StdRng, SeedableRng};
use time::OffsetDateTime;

/// Seed derived from the current time.
pub fn time_seed() -> u64 {
    OffsetDateTime::now_utc().unix_timestamp_nanos() as u64
}

/// Password generator that owns its random source.
///
/// The random source is not cryptographically secure; it is
/// seeded from the current time unless a seed is supplied.
/// Create one generator per thread.
#[derive(Debug, Clone)]
pub struct Generator {
    config: Config,
    rng: StdRng,
}

impl Generator {
    /// Create a generator seeded from the current time.
    pub fn new(config: Config) -> Self {
        Self::from_seed(config, time_seed())
    }

    /// Create a generator with a fixed seed.
    ///
    /// Generators created with the same seed, configuration and
    /// word list produce identical passwords.
    pub fn from_seed(config: Config, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator from an existing random source.
    pub fn from_rng(config: Config, rng: StdRng) -> Self {
        Self { config, rng }
    }

    /// Configuration used by this generator.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate a single password.
    pub fn password<L: WordList + ?Sized>(
        &mut self,
        list: &L,
    ) -> Result<String> {
        select::generate_password(list, &self.config, &mut self.rng)
    }

    /// Generate and analyze a single password.
    pub fn candidate<L: WordList + ?Sized>(
        &mut self,
        list: &L,
    ) -> Result<Candidate> {
        select::generate_candidate(list, &self.config, &mut self.rng)
    }

    /// Generate a batch of candidates and select the best.
    pub fn select<L: WordList + ?Sized>(
        &mut self,
        list: &L,
    ) -> Result<Selection> {
        select::select(list, &self.config, &mut self.rng)
    }
}
