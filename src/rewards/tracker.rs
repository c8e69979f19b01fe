//! Round history for one battle.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{Card, Trait};
use crate::core::{EngineError, Outcome, Result, RewardConfig, Round};

/// One finished round as seen by the reward rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub player_card: Card,
    pub cpu_card: Card,
    pub outcome: Outcome,
    pub revealed_trait: Trait,
}

/// Summary of a finished battle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResult {
    /// Rounds the CPU lost a card.
    pub player_wins: u32,
    /// Rounds the player lost a card.
    pub cpu_wins: u32,
    pub is_perfect_win: bool,
    pub is_comeback_win: bool,
    pub rounds: Vec<RoundRecord>,
}

impl BattleResult {
    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.player_wins > self.cpu_wins
    }
}

/// Collects round outcomes for the battle in progress.
#[derive(Clone, Debug)]
pub struct BattleTracker {
    rounds: Vec<RoundRecord>,
    player_losses: u32,
    cpu_losses: u32,
    starting_cards: i32,
}

impl Default for BattleTracker {
    fn default() -> Self {
        Self::new(&RewardConfig::default())
    }
}

impl BattleTracker {
    #[must_use]
    pub fn new(config: &RewardConfig) -> Self {
        Self {
            rounds: Vec::new(),
            player_losses: 0,
            cpu_losses: 0,
            starting_cards: config.starting_cards,
        }
    }

    pub fn start_new_battle(&mut self) {
        self.rounds.clear();
        self.player_losses = 0;
        self.cpu_losses = 0;
        debug!("started new battle");
    }

    pub fn record_round(&mut self, record: RoundRecord) {
        match record.outcome {
            Outcome::Player => self.cpu_losses += 1,
            Outcome::Cpu => self.player_losses += 1,
            Outcome::Draw => {}
        }
        debug!(
            outcome = ?record.outcome,
            revealed = %record.revealed_trait,
            player_losses = self.player_losses,
            cpu_losses = self.cpu_losses,
            "round recorded"
        );
        self.rounds.push(record);
    }

    /// Record a resolved engine round. Fails if cards or resolution are missing.
    pub fn record_resolved(&mut self, round: &Round) -> Result<()> {
        let (Some(player_card), Some(cpu_card), Some(outcome)) =
            (&round.cards.player, &round.cards.cpu, round.outcome())
        else {
            return Err(EngineError::RoundUnresolved);
        };

        self.record_round(RoundRecord {
            player_card: player_card.clone(),
            cpu_card: cpu_card.clone(),
            outcome,
            revealed_trait: round.revealed_trait,
        });
        Ok(())
    }

    #[must_use]
    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    #[must_use]
    pub fn battle_result(&self) -> BattleResult {
        let player_wins = self.cpu_losses;
        let cpu_wins = self.player_losses;

        let result = BattleResult {
            player_wins,
            cpu_wins,
            is_perfect_win: self.player_losses == 0 && player_wins > 0,
            is_comeback_win: self.was_player_behind() && player_wins > cpu_wins,
            rounds: self.rounds.clone(),
        };

        debug!(
            player_wins,
            cpu_wins,
            perfect = result.is_perfect_win,
            comeback = result.is_comeback_win,
            "battle result"
        );
        result
    }

    /// Replays the history from equal starting counts and stops at the first
    /// round that leaves the player behind.
    fn was_player_behind(&self) -> bool {
        let mut player = self.starting_cards;
        let mut cpu = self.starting_cards;

        for (index, round) in self.rounds.iter().enumerate() {
            match round.outcome {
                Outcome::Player => {
                    player += 1;
                    cpu -= 1;
                }
                Outcome::Cpu => {
                    player -= 1;
                    cpu += 1;
                }
                Outcome::Draw => {}
            }
            if player < cpu {
                debug!(round = index + 1, player, cpu, "player was behind");
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCatalog;
    use crate::core::{GameMode, GameState, Pile};
    use crate::games::classic;

    fn record(outcome: Outcome) -> RoundRecord {
        let catalog = CardCatalog::builtin();
        RoundRecord {
            player_card: catalog.create_card("Speedster", None).unwrap(),
            cpu_card: catalog.create_card("Tank", None).unwrap(),
            outcome,
            revealed_trait: Trait::Speed,
        }
    }

    fn tracker(outcomes: &[Outcome]) -> BattleTracker {
        let mut tracker = BattleTracker::default();
        for &o in outcomes {
            tracker.record_round(record(o));
        }
        tracker
    }

    #[test]
    fn test_perfect_win() {
        let result = tracker(&[Outcome::Player, Outcome::Draw, Outcome::Player]).battle_result();
        assert_eq!(result.player_wins, 2);
        assert_eq!(result.cpu_wins, 0);
        assert!(result.is_perfect_win);
        assert!(!result.is_comeback_win);
        assert!(result.is_victory());
        assert_eq!(result.rounds.len(), 3);
    }

    #[test]
    fn test_no_wins_is_not_perfect() {
        let result = tracker(&[Outcome::Draw, Outcome::Draw]).battle_result();
        assert!(!result.is_perfect_win);
        assert!(!result.is_victory());
    }

    #[test]
    fn test_comeback() {
        let result = tracker(&[Outcome::Cpu, Outcome::Player, Outcome::Player]).battle_result();
        assert!(result.is_comeback_win);
        assert!(!result.is_perfect_win);
    }

    #[test]
    fn test_behind_but_lost() {
        let result = tracker(&[Outcome::Cpu, Outcome::Player]).battle_result();
        assert!(!result.is_comeback_win);
    }

    #[test]
    fn test_start_new_battle_clears() {
        let mut t = tracker(&[Outcome::Cpu]);
        t.start_new_battle();
        assert!(t.rounds().is_empty());
        assert_eq!(t.battle_result(), BattleResult::default());
    }

    #[test]
    fn test_record_resolved() {
        let catalog = CardCatalog::builtin();
        let player: Pile = [catalog.create_card("Speedster", None).unwrap()].into_iter().collect();
        let cpu: Pile = [catalog.create_card("Tank", None).unwrap()].into_iter().collect();
        let state = GameState::started(GameMode::Classic, player, cpu);
        let state = classic::select_attribute(&state, Trait::Speed).unwrap();

        let mut t = BattleTracker::default();
        t.record_resolved(state.round().unwrap()).unwrap();
        assert_eq!(t.rounds()[0].outcome, Outcome::Player);

        let open = Round::new(1, Trait::Grip);
        assert!(matches!(t.record_resolved(&open), Err(EngineError::RoundUnresolved)));
    }
}
