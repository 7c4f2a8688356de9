//! Deterministic random source for treasure draws.
//!
//! Draws must be reproducible in tests, so the composer never touches a
//! global RNG. [`DrawRng`] wraps ChaCha8 behind the two sampling primitives
//! the composer needs; a fixed seed produces identical draw sequences.

use rand::seq::{IteratorRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG handed to the composer and navigator by the caller.
#[derive(Debug, Clone)]
pub struct DrawRng {
    inner: ChaCha8Rng,
}

impl DrawRng {
    /// RNG seeded from OS entropy, for normal interactive use.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// RNG with a fixed seed. Same seed, same draw sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniformly random value in the given range.
    pub fn gen_range(&mut self, range: std::ops::RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Uniformly random element of a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// `n` distinct elements sampled uniformly, `None` when the slice is too
    /// small. Order of the sample is random.
    pub fn sample_distinct<T: Copy>(&mut self, slice: &[T], n: usize) -> Option<Vec<T>> {
        if slice.len() < n {
            return None;
        }
        let mut picked = slice.iter().copied().choose_multiple(&mut self.inner, n);
        picked.shuffle(&mut self.inner);
        Some(picked)
    }

    /// `n` elements sampled uniformly with replacement.
    pub fn sample_with_replacement<T: Copy>(&mut self, slice: &[T], n: usize) -> Option<Vec<T>> {
        if slice.is_empty() {
            return None;
        }
        Some(
            (0..n)
                .filter_map(|_| self.choose(slice).copied())
                .collect(),
        )
    }
}
