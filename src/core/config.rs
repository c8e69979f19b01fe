//! Rule and reward configuration.
//!
//! Both configs carry the shipped values as their `Default` and can be
//! loaded from any serde format by the host application.

use serde::{Deserialize, Serialize};

/// Dealing parameters shared by the three modes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Cards dealt to each side in classic and pit mode.
    pub hand_size: usize,

    /// Size of the card set split between the two gamble decks.
    pub gamble_deck_size: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            hand_size: 3,
            gamble_deck_size: 20,
        }
    }
}

impl RulesConfig {
    /// Override the per-side hand size.
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Override the gamble set size.
    pub fn with_gamble_deck_size(mut self, size: usize) -> Self {
        self.gamble_deck_size = size;
        self
    }
}

/// Point values for the battle reward calculator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Base points for a won battle.
    pub victory_points: u32,

    /// Flat bonus for winning without losing a card.
    pub perfect_bonus: u32,

    /// Flat bonus for winning after being behind.
    pub comeback_bonus: u32,

    /// Cards each side is assumed to start with when replaying a battle
    /// to find out whether the player was ever behind.
    pub starting_cards: i32,

    /// `(min_streak, multiplier)` pairs. The first pair whose threshold the
    /// streak reaches wins, so keep them sorted by descending threshold.
    pub streak_tiers: Vec<(u32, u32)>,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            victory_points: 10,
            perfect_bonus: 25,
            comeback_bonus: 18,
            starting_cards: 3,
            streak_tiers: vec![(5, 5), (3, 3), (2, 2)],
        }
    }
}

impl RewardConfig {
    /// Override the base victory points.
    pub fn with_victory_points(mut self, points: u32) -> Self {
        self.victory_points = points;
        self
    }

    /// Override the streak tiers. Tiers are re-sorted by threshold.
    pub fn with_streak_tiers(mut self, mut tiers: Vec<(u32, u32)>) -> Self {
        tiers.sort_by(|a, b| b.0.cmp(&a.0));
        self.streak_tiers = tiers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_defaults() {
        let config = RulesConfig::default();
        assert_eq!(config.hand_size, 3);
        assert_eq!(config.gamble_deck_size, 20);
    }

    #[test]
    fn test_rules_builders() {
        let config = RulesConfig::default()
            .with_hand_size(5)
            .with_gamble_deck_size(8);
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.gamble_deck_size, 8);
    }

    #[test]
    fn test_reward_tiers_sorted() {
        let config = RewardConfig::default().with_streak_tiers(vec![(2, 2), (10, 7), (4, 3)]);
        assert_eq!(config.streak_tiers, vec![(10, 7), (4, 3), (2, 2)]);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: RewardConfig = serde_json::from_str(r#"{"perfect_bonus": 40}"#).unwrap();
        assert_eq!(config.perfect_bonus, 40);
        assert_eq!(config.victory_points, 10);
        assert_eq!(config.streak_tiers.len(), 3);
    }
}
