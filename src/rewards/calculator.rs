//! Reward rules for a finished battle.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::tracker::BattleResult;
use crate::core::RewardConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardKind {
    Points,
    Streak,
    Perfect,
    Comeback,
}

/// One line of the reward breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub kind: RewardKind,
    pub amount: u32,
    pub description: String,
}

impl Reward {
    fn new(kind: RewardKind, amount: u32, description: impl Into<String>) -> Self {
        Self {
            kind,
            amount,
            description: description.into(),
        }
    }
}

/// Pure reward rules.
#[derive(Clone, Debug, Default)]
pub struct RewardCalculator {
    config: RewardConfig,
}

impl RewardCalculator {
    #[must_use]
    pub fn new(config: RewardConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RewardConfig {
        &self.config
    }

    /// Victory points if the player won more rounds than the CPU.
    #[must_use]
    pub fn base_points(&self, result: &BattleResult) -> u32 {
        if result.is_victory() {
            self.config.victory_points
        } else {
            0
        }
    }

    /// Multiplier of the highest tier the streak reaches, 1 below every tier.
    #[must_use]
    pub fn streak_multiplier(&self, streak: u32) -> u32 {
        self.config
            .streak_tiers
            .iter()
            .find(|(threshold, _)| streak >= *threshold)
            .map_or(1, |&(_, multiplier)| multiplier)
    }

    #[must_use]
    pub fn perfect_bonus(&self, result: &BattleResult) -> u32 {
        if result.is_perfect_win {
            self.config.perfect_bonus
        } else {
            0
        }
    }

    #[must_use]
    pub fn comeback_bonus(&self, result: &BattleResult) -> u32 {
        if result.is_comeback_win {
            self.config.comeback_bonus
        } else {
            0
        }
    }

    /// The reward breakdown in order points, streak, perfect, comeback.
    ///
    /// `streak` is the running streak before this battle. Zero-amount
    /// entries are left out.
    #[must_use]
    pub fn generate(&self, result: &BattleResult, streak: u32) -> Vec<Reward> {
        let mut rewards = Vec::with_capacity(4);

        let base = self.base_points(result);
        if base > 0 {
            rewards.push(Reward::new(RewardKind::Points, base, "Victory Points"));
        }

        let multiplier = self.streak_multiplier(streak);
        let streak_bonus = base * multiplier.saturating_sub(1);
        if streak_bonus > 0 {
            rewards.push(Reward::new(
                RewardKind::Streak,
                streak_bonus,
                format!("{multiplier}x Streak Bonus!"),
            ));
        }

        let perfect = self.perfect_bonus(result);
        if perfect > 0 {
            rewards.push(Reward::new(RewardKind::Perfect, perfect, "Perfect Victory!"));
        }

        let comeback = self.comeback_bonus(result);
        if comeback > 0 {
            rewards.push(Reward::new(RewardKind::Comeback, comeback, "Amazing Comeback!"));
        }

        debug!(
            streak,
            multiplier,
            entries = rewards.len(),
            total = total(&rewards),
            "rewards generated"
        );
        rewards
    }
}

/// Sum of a reward breakdown.
#[must_use]
pub fn total(rewards: &[Reward]) -> u32 {
    rewards.iter().map(|r| r.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(player_wins: u32, cpu_wins: u32, perfect: bool, comeback: bool) -> BattleResult {
        BattleResult {
            player_wins,
            cpu_wins,
            is_perfect_win: perfect,
            is_comeback_win: comeback,
            rounds: Vec::new(),
        }
    }

    #[test]
    fn test_streak_tiers() {
        let calc = RewardCalculator::default();
        let multipliers: Vec<_> = (0..8).map(|s| calc.streak_multiplier(s)).collect();
        assert_eq!(multipliers, vec![1, 1, 2, 3, 3, 5, 5, 5]);
    }

    #[test]
    fn test_base_points() {
        let calc = RewardCalculator::default();
        assert_eq!(calc.base_points(&result(2, 1, false, false)), 10);
        assert_eq!(calc.base_points(&result(1, 1, false, false)), 0);
    }

    #[test]
    fn test_perfect_win_with_streak() {
        let calc = RewardCalculator::default();
        let rewards = calc.generate(&result(3, 0, true, false), 3);

        let kinds: Vec<_> = rewards.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![RewardKind::Points, RewardKind::Streak, RewardKind::Perfect]);
        assert_eq!(rewards[1].amount, 20);
        assert_eq!(rewards[1].description, "3x Streak Bonus!");
        assert_eq!(total(&rewards), 10 + 20 + 25);
    }

    #[test]
    fn test_loss_has_no_rewards() {
        let calc = RewardCalculator::default();
        assert!(calc.generate(&result(0, 2, false, false), 6).is_empty());
    }

    #[test]
    fn test_comeback_entry() {
        let calc = RewardCalculator::default();
        let rewards = calc.generate(&result(2, 1, false, true), 0);
        assert_eq!(rewards.len(), 2);
        assert_eq!(rewards[1].kind, RewardKind::Comeback);
        assert_eq!(rewards[1].amount, 18);
        assert_eq!(rewards[1].description, "Amazing Comeback!");
    }

    #[test]
    fn test_custom_config() {
        let calc = RewardCalculator::new(
            RewardConfig::default()
                .with_victory_points(4)
                .with_streak_tiers(vec![(1, 2), (10, 10)]),
        );
        assert_eq!(calc.streak_multiplier(0), 1);
        assert_eq!(calc.streak_multiplier(1), 2);
        assert_eq!(calc.streak_multiplier(10), 10);
        assert_eq!(total(&calc.generate(&result(1, 0, false, false), 1)), 8);
    }

    #[test]
    fn test_reward_kind_serde() {
        let json = serde_json::to_string(&RewardKind::Comeback).unwrap();
        assert_eq!(json, "\"comeback\"");
    }
}
