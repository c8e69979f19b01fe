//! Core engine types: sides, state, RNG, configuration, errors.
//!
//! This module holds the building blocks shared by every mode. Mode rules
//! live in `rules` and `games`; nothing here knows how a round resolves.

pub mod config;
pub mod error;
pub mod rng;
pub mod side;
pub mod state;

pub use config::{RewardConfig, RulesConfig};
pub use error::{EngineError, Result};
pub use rng::{shuffle, GameRng, GameRngState, RandomSource, ScriptedRng};
pub use side::{Side, Sides};
pub use state::{GameMode, GameState, Outcome, Phase, Pile, Resolution, Round, VictoryCondition};
