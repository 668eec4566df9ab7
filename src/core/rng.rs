//! Deterministic random number generation for pool and board shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Forkable**: Derive independent streams (pool order vs. cell order)
//!
//! ## Usage
//!
//! ```
//! use syllable_memory::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut round_rng = rng.fork();
//!
//! let mut a = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
//! let mut b = a.clone();
//! rng.shuffle(&mut a);
//! round_rng.shuffle(&mut b);
//!
//! // Forks are deterministic: the same seed and fork count give the same stream
//! let mut again = GameRng::new(42);
//! let mut round_again = again.fork();
//! let mut c = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
//! round_again.shuffle(&mut c);
//! assert_eq!(b, c);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used by the session and the round factory.
///
/// Uses ChaCha8 so that a seed recorded in [`SessionConfig`](super::SessionConfig)
/// reproduces a whole session.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent, deterministic stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Shuffle a slice in place (uniform permutation).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
