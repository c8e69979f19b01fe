//! Deterministic, injectable randomness.
//!
//! Every random decision in the engine (card variation, set draws, deck
//! splits, CPU trait picks in gamble mode, CPU predictions, pit shuffles)
//! goes through a [`RandomSource`]. Production code uses [`GameRng`];
//! tests can substitute a scripted source to force outcomes.
//!
//! ```
//! use compare_engine::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same sequence
//! assert_eq!(a.gen_range(0..100), b.gen_range(0..100));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::ops::Range;

/// Source of randomness for engine decisions.
///
/// Ranges are half-open, like `rand`'s `gen_range`. Implementations must
/// return a value inside the range for any non-empty range.
pub trait RandomSource {
    /// Random integer in `range`.
    fn gen_range(&mut self, range: Range<i32>) -> i32;

    /// Random index in `range`.
    fn gen_range_usize(&mut self, range: Range<usize>) -> usize;

    /// `true` with the given probability.
    fn gen_bool(&mut self, probability: f64) -> bool;

    /// A random ordering of `0..len`.
    ///
    /// The default is a Fisher-Yates pass over `gen_range_usize`, so scripted
    /// sources control it through their index queue.
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        for i in (1..len).rev() {
            let j = self.gen_range_usize(0..i + 1);
            order.swap(i, j);
        }
        order
    }
}

/// Reorder `items` by [`RandomSource::permutation`].
pub fn shuffle<T, R>(rng: &mut R, items: &mut Vec<T>)
where
    R: RandomSource + ?Sized,
{
    let order = rng.permutation(items.len());
    let mut slots: Vec<Option<T>> = items.drain(..).map(Some).collect();
    items.extend(order.into_iter().filter_map(|i| slots[i].take()));
}

/// Seeded RNG backed by ChaCha8.
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

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
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

impl RandomSource for GameRng {
    fn gen_range(&mut self, range: Range<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    fn gen_range_usize(&mut self, range: Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(&mut self.inner);
        order
    }
}

/// Replays scripted values in order.
///
/// Each queue serves its own method. Scripted values are clamped into the
/// requested range; an exhausted queue yields the range start (or `false`).
///
/// ```
/// use compare_engine::core::{RandomSource, ScriptedRng};
///
/// let mut rng = ScriptedRng::new().with_bools([true, false]).with_indices([3]);
///
/// assert!(rng.gen_bool(0.5));
/// assert!(!rng.gen_bool(0.5));
/// assert!(!rng.gen_bool(0.5));
/// assert_eq!(rng.gen_range_usize(0..4), 3);
/// assert_eq!(rng.gen_range_usize(0..4), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    ints: VecDeque<i32>,
    indices: VecDeque<usize>,
    bools: VecDeque<bool>,
}

impl ScriptedRng {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ints(mut self, values: impl IntoIterator<Item = i32>) -> Self {
        self.ints.extend(values);
        self
    }

    #[must_use]
    pub fn with_indices(mut self, values: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(values);
        self
    }

    #[must_use]
    pub fn with_bools(mut self, values: impl IntoIterator<Item = bool>) -> Self {
        self.bools.extend(values);
        self
    }
}

impl RandomSource for ScriptedRng {
    fn gen_range(&mut self, range: Range<i32>) -> i32 {
        match self.ints.pop_front() {
            Some(v) => v.clamp(range.start, range.end - 1),
            None => range.start,
        }
    }

    fn gen_range_usize(&mut self, range: Range<usize>) -> usize {
        match self.indices.pop_front() {
            Some(v) => v.clamp(range.start, range.end - 1),
            None => range.start,
        }
    }

    fn gen_bool(&mut self, _probability: f64) -> bool {
        self.bools.pop_front().unwrap_or(false)
    }
}

/// Serializable RNG state for checkpointing a game between transitions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
