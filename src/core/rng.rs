//! Deterministic shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deck orders
//! - **Unbiased**: Fisher–Yates over the requested range
//! - **Resumable**: snapshots store the word position so a restored
//!   session continues the same shuffle stream
//!
//! ```
//! use deck_engine::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! let mut x = vec![1, 2, 3, 4, 5, 6];
//! let mut y = x.clone();
//! a.shuffle(&mut x);
//! b.shuffle(&mut y);
//! assert_eq!(x, y);
//! ```

use im::Vector;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used for every deck permutation.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Shuffle a persistent vector in place.
    pub fn shuffle_vector<T: Clone>(&mut self, vector: &mut Vector<T>) {
        self.shuffle_vector_from(vector, 0);
    }

    /// Shuffle only the elements at `start..` of a persistent vector.
    ///
    /// Fisher–Yates: walk down from the last index, swapping each slot with
    /// a uniformly chosen slot at or below it. Elements before `start` keep
    /// their positions.
    pub fn shuffle_vector_from<T: Clone>(&mut self, vector: &mut Vector<T>, start: usize) {
        let len = vector.len();
        if len <= start + 1 {
            return;
        }
        for i in (start + 1..len).rev() {
            let j = self.inner.gen_range(start..=i);
            vector.swap(i, j);
        }
    }

    /// Capture the stream position for a snapshot.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Persisted RNG position: seed plus ChaCha word offset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
