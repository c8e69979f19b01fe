//! Battle rewards and persistent statistics.
//!
//! ## Key Types
//!
//! - `BattleTracker`: Records round outcomes and summarizes a battle
//! - `RewardCalculator`: Pure reward rules (base points, streak, bonuses)
//! - `StatsStore`: Persistence collaborator for `GameStats`
//! - `RewardManager`: Applies a battle to the stored stats and saves once

pub mod calculator;
pub mod manager;
pub mod stats;
pub mod tracker;

pub use calculator::{Reward, RewardCalculator, RewardKind};
pub use manager::RewardManager;
pub use stats::{GameStats, MemoryStatsStore, StatsStore};
pub use tracker::{BattleResult, BattleTracker, RoundRecord};
