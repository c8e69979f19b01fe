//! Comparable card traits and higher/lower predictions.
//!
//! Every card carries the same four integer traits. Rounds pick one of
//! them and compare the two played cards on it.

use serde::{Deserialize, Serialize};

/// One of the four numeric card traits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trait {
    Speed,
    Power,
    Grip,
    Weight,
}

impl Trait {
    /// All traits in catalog order. CPU tie-breaks follow this order.
    pub const ALL: [Trait; 4] = [Trait::Speed, Trait::Power, Trait::Grip, Trait::Weight];

    /// Lowercase name, as shown to players.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Trait::Speed => "speed",
            Trait::Power => "power",
            Trait::Grip => "grip",
            Trait::Weight => "weight",
        }
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A side's guess about its own value relative to the opponent's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prediction {
    Higher,
    Lower,
}

impl Prediction {
    /// Whether the prediction is correct for `own` against `opponent`.
    ///
    /// Both comparisons are strict, so equal values make either
    /// prediction wrong.
    ///
    /// ```
    /// use compare_engine::cards::Prediction;
    ///
    /// assert!(Prediction::Higher.holds(80, 60));
    /// assert!(!Prediction::Lower.holds(80, 60));
    /// assert!(!Prediction::Higher.holds(70, 70));
    /// assert!(!Prediction::Lower.holds(70, 70));
    /// ```
    #[must_use]
    pub const fn holds(self, own: i32, opponent: i32) -> bool {
        match self {
            Prediction::Higher => own > opponent,
            Prediction::Lower => own < opponent,
        }
    }
}
