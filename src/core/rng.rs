//! Deterministic random number generation for word selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: same seed produces the same secret on every run
//! - **Entropy option**: production engines seed from the OS instead
//!
//! Word selection is the engine's only source of randomness, so seeding
//! the RNG pins an entire session transcript:
//!
//! ```
//! use gallows::{GameRng, WordList};
//!
//! let list = WordList::default();
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! assert_eq!(list.choose(&mut a), list.choose(&mut b));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seedable RNG behind word selection.
///
/// Uses ChaCha8 for speed with platform-independent, reproducible output.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Choose a uniformly random element from a slice.
    ///
    /// Returns `None` if the slice is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
