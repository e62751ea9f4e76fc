//! Random permutations of index sets.
//!
//! Picking `k` items from `n` without replacement is always done
//! by shuffling every index and taking a prefix so that an index
//! can never be chosen twice.
use rand::Rng;

/// Shuffle a slice of indices in place using a backward
/// Fisher-Yates sweep.
///
/// Slices with fewer than two elements are left untouched.
pub fn shuffle_indices<R: Rng + ?Sized>(
    indices: &mut [usize],
    rng: &mut R,
) {
    for i in (1..indices.len()).rev() {
        let j = rng.gen_range(0..=i);
        indices.swap(i, j);
    }
}

/// Create the indices `0..len` in a random order.
pub fn shuffled_indices<R: Rng + ?Sized>(
    len: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    shuffle_indices(&mut indices, rng);
    indices
}
