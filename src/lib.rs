//! # compare-engine
//!
//! Round-resolution engine for a "Top Trumps"-style car card game.
//!
//! ## Design Principles
//!
//! 1. **Transitions Return New State**: Every transition takes a
//!    `GameState` by reference and returns the next one. Piles are
//!    persistent vectors (`im-rs`), so cloning a state is cheap.
//!
//! 2. **One State Shape**: Classic, gamble and pit share `GameState`;
//!    a mode only decides which fields it uses.
//!
//! 3. **Injected Randomness**: All random choices go through
//!    `RandomSource`. Greedy CPU choices are deterministic.
//!
//! ## Modes
//!
//! - **Classic**: both top cards compared on one trait, winner takes both
//! - **Gamble**: predict higher/lower, decks are consumed, points only
//! - **Pit**: predict higher/lower with a chosen hand card, wrong calls
//!   lose the card to the pit
//!
//! ## Modules
//!
//! - `core`: Sides, state, RNG, configuration, errors
//! - `cards`: Traits, templates, cards and the catalog
//! - `rules`: Shared higher/lower skeleton and its strategy trait
//! - `games`: Dealer and the three modes
//! - `rewards`: Battle tracking, rewards and persisted stats

pub mod cards;
pub mod core;
pub mod games;
pub mod rewards;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    EngineError, GameMode, GameRng, GameRngState, GameState, Outcome, Phase, Pile, RandomSource,
    Resolution, Result, RewardConfig, Round, RulesConfig, ScriptedRng, Side, Sides,
    VictoryCondition,
};

pub use crate::cards::{Card, CardCatalog, CardId, CardTemplate, Category, Prediction, Rarity, Trait, Variation};

pub use crate::rules::{judge, CardSource, PredictGame, PredictRules};

pub use crate::games::{GambleGame, GambleRules, PitGame, PitRules};

pub use crate::rewards::{
    BattleResult, BattleTracker, GameStats, MemoryStatsStore, Reward, RewardCalculator,
    RewardKind, RewardManager, RoundRecord, StatsStore,
};
