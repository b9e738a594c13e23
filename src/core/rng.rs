//! Deterministic, seedable randomness for deck shuffling.
//!
//! Every shuffle in the game flows through a `GameRng`, so a whole session
//! can be replayed from its seed:
//!
//! ```
//! use flip_seven::core::GameRng;
//!
//! let mut session = GameRng::new(7);
//! let mut round_one = session.fork();
//!
//! let mut again = GameRng::new(7);
//! let mut round_one_again = again.fork();
//!
//! let mut a: Vec<u32> = (0..20).collect();
//! let mut b = a.clone();
//! round_one.shuffle(&mut a);
//! round_one_again.shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 stream with per-round forking.
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

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent stream, one per round.
    ///
    /// Forks are numbered, so the n-th fork of a given seed is always the
    /// same stream regardless of how much the parent has been used.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
