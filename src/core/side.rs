//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! Every game in this crate is the human player against the CPU.
//!
//! ## Sides
//!
//! Fixed two-slot storage indexed by `Side`, used for hands, decks,
//! won piles and scores.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player (driven from outside the engine).
    Player,
    /// The computer opponent (decisions computed inline).
    Cpu,
}

impl Side {
    /// Both sides, player first.
    pub const BOTH: [Side; 2] = [Side::Player, Side::Cpu];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Cpu,
            Side::Cpu => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Cpu => write!(f, "CPU"),
        }
    }
}

/// Per-side data with O(1) access.
///
/// ## Example
///
/// ```
/// use compare_engine::core::{Side, Sides};
///
/// let mut scores: Sides<u32> = Sides::default();
/// scores[Side::Cpu] += 1;
///
/// assert_eq!(scores[Side::Player], 0);
/// assert_eq!(scores[Side::Cpu], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sides<T> {
    pub player: T,
    pub cpu: T,
}

impl<T> Sides<T> {
    /// Create from explicit values.
    pub const fn new(player: T, cpu: T) -> Self {
        Self { player, cpu }
    }

    /// Create with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            player: factory(Side::Player),
            cpu: factory(Side::Cpu),
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            player: value.clone(),
            cpu: value,
        }
    }

    /// Get a reference to one side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Player => &self.player,
            Side::Cpu => &self.cpu,
        }
    }

    /// Get a mutable reference to one side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Player => &mut self.player,
            Side::Cpu => &mut self.cpu,
        }
    }

    /// Iterate over (Side, &T) pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Player, &self.player), (Side::Cpu, &self.cpu)].into_iter()
    }

    /// Map both entries.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Sides<U> {
        Sides {
            player: f(&self.player),
            cpu: f(&self.cpu),
        }
    }
}

impl<T> Index<Side> for Sides<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for Sides<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
