//! Applies finished battles to the stored statistics.

use tracing::{info, warn};

use super::calculator::{total, Reward, RewardCalculator};
use super::stats::{GameStats, StatsStore};
use super::tracker::BattleResult;
use crate::core::{Result, RewardConfig};

/// Owns the stats snapshot and its store.
#[derive(Debug)]
pub struct RewardManager<S> {
    store: S,
    stats: GameStats,
    calculator: RewardCalculator,
}

impl<S: StatsStore> RewardManager<S> {
    /// Load stats from `store`. A missing or unreadable snapshot starts
    /// from zero.
    pub fn new(store: S) -> Self {
        Self::with_config(store, RewardConfig::default())
    }

    pub fn with_config(store: S, config: RewardConfig) -> Self {
        let stats = match store.load_stats() {
            Ok(Some(stats)) => stats,
            Ok(None) => GameStats::default(),
            Err(error) => {
                warn!(%error, "failed to load stats, starting fresh");
                GameStats::default()
            }
        };
        info!(?stats, "reward manager ready");

        Self {
            store,
            stats,
            calculator: RewardCalculator::new(config),
        }
    }

    /// Generate rewards with the streak before this battle, update the
    /// stats and save them once.
    ///
    /// The stats only change once the save succeeds; on a failed save the
    /// battle is not counted and can be processed again.
    pub fn process_battle_result(&mut self, result: &BattleResult) -> Result<Vec<Reward>> {
        let rewards = self.calculator.generate(result, self.stats.current_streak);
        let mut stats = self.stats;

        stats.total_games += 1;
        if result.is_victory() {
            stats.total_wins += 1;
            stats.current_streak += 1;
            stats.best_streak = stats.best_streak.max(stats.current_streak);
        } else {
            stats.current_streak = 0;
        }
        if result.is_perfect_win {
            stats.perfect_wins += 1;
        }
        if result.is_comeback_win {
            stats.comeback_wins += 1;
        }
        stats.total_points += u64::from(total(&rewards));

        self.store.save_stats(&stats)?;
        self.stats = stats;

        info!(
            points = total(&rewards),
            streak = stats.current_streak,
            games = stats.total_games,
            "battle processed"
        );
        Ok(rewards)
    }

    /// Snapshot of the current stats.
    #[must_use]
    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn reset_stats(&mut self) -> Result<()> {
        info!("resetting stats");
        let stats = GameStats::default();
        self.store.save_stats(&stats)?;
        self.stats = stats;
        Ok(())
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn calculator(&self) -> &RewardCalculator {
        &self.calculator
    }
}
