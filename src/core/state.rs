//! Game state shared by the three modes.
//!
//! ## GameState
//!
//! One shape covers classic, gamble and pit mode:
//! - Per-side cards: hands in classic and pit mode, decks in gamble mode
//! - Per-side won piles (classic only)
//! - The pit (pit mode only, always empty elsewhere)
//! - Scores, round counter, phase, victory condition
//! - Trait-chooser bookkeeping for the predict modes
//!
//! Piles are `im::Vector`s, so every transition can return a fresh state
//! without deep-copying the cards.
//!
//! ## Round
//!
//! Transient per-round record. Created when the trait is known, filled in
//! as cards and predictions arrive, resolved at reveal, and dropped once
//! the round is scored into the game state.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{EngineError, Result};
use super::side::{Side, Sides};
use crate::cards::{Card, Prediction, Trait};

/// Ordered card sequence. Index 0 is the top.
pub type Pile = Vector<Card>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Top card against top card on a chosen trait.
    Classic,
    /// Higher/lower predictions over two exhaustible decks.
    Gamble,
    /// Higher/lower predictions with card choice; wrong guesses feed the pit.
    Pit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Not dealt yet.
    Selection,
    /// Classic: waiting for the player to pick a trait.
    Idle,
    /// Classic: a round has been compared and awaits processing.
    Battle,
    /// Predict modes: waiting for the player to pick the trait.
    TraitReveal,
    /// Predict modes: trait known, waiting for the player's prediction.
    Prediction,
    /// Pit: waiting for the player to pick a card from hand.
    CardSelection,
    /// Gamble: values revealed. Pit: both cards chosen, not yet revealed.
    Reveal,
    /// Pit: values revealed, awaiting processing.
    Result,
    GameOver,
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VictoryCondition {
    /// The CPU ran out of cards while the player still holds some.
    CardCollection,
    /// The player ran out of cards while the CPU still holds some.
    Survival,
    /// Both sides (or, in gamble and classic mode, the playable pile) ran out.
    GameOver,
}

/// Which side a round favoured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Player,
    Cpu,
    Draw,
}

impl Outcome {
    /// Outcome of a plain value comparison. Equal values draw.
    #[must_use]
    pub fn compare(player_value: i32, cpu_value: i32) -> Self {
        match player_value.cmp(&cpu_value) {
            std::cmp::Ordering::Greater => Outcome::Player,
            std::cmp::Ordering::Less => Outcome::Cpu,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Outcome of a predict round: a side wins only when it alone keeps
    /// its card.
    #[must_use]
    pub fn from_keeps(keeps: &Sides<bool>) -> Self {
        match (keeps.player, keeps.cpu) {
            (true, false) => Outcome::Player,
            (false, true) => Outcome::Cpu,
            _ => Outcome::Draw,
        }
    }

    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Player => Some(Side::Player),
            Outcome::Cpu => Some(Side::Cpu),
            Outcome::Draw => None,
        }
    }
}

/// Revealed values and their consequences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub values: Sides<i32>,
    /// Prediction correctness. Always false in classic mode.
    pub correct: Sides<bool>,
    /// Which sides keep (score with) their card.
    pub keeps: Sides<bool>,
    pub cards_to_pit: SmallVec<[Card; 2]>,
    pub outcome: Outcome,
}

/// Per-round record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub number: u32,
    pub revealed_trait: Trait,
    /// Played cards, absent until chosen or flipped.
    pub cards: Sides<Option<Card>>,
    pub predictions: Sides<Option<Prediction>>,
    pub resolution: Option<Resolution>,
}

impl Round {
    #[must_use]
    pub fn new(number: u32, revealed_trait: Trait) -> Self {
        Self {
            number,
            revealed_trait,
            cards: Sides::default(),
            predictions: Sides::default(),
            resolution: None,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }

    /// The round outcome, once resolved.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.resolution.as_ref().map(|r| r.outcome)
    }
}

/// Full state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub mode: GameMode,

    /// Hands (classic, pit) or decks (gamble).
    pub cards: Sides<Pile>,

    /// Cards won in classic rounds.
    pub won: Sides<Pile>,

    pub pit: Pile,

    /// Rounds won. Classic credits the round winner; gamble and pit
    /// credit every side that keeps its card.
    pub scores: Sides<u32>,

    pub current_round: Option<Round>,
    pub round_number: u32,

    pub phase: Phase,
    pub is_game_started: bool,
    pub is_game_over: bool,
    pub victory_condition: Option<VictoryCondition>,

    /// Who picks the trait for the next round (predict modes).
    pub trait_chooser: Side,
    /// Whether the next round's trait is still to be chosen.
    pub trait_to_choose: bool,
    pub revealed_trait: Option<Trait>,
}

impl GameState {
    /// The not-yet-dealt state for a mode.
    #[must_use]
    pub fn initial(mode: GameMode) -> Self {
        Self {
            mode,
            cards: Sides::default(),
            won: Sides::default(),
            pit: Pile::new(),
            scores: Sides::default(),
            current_round: None,
            round_number: 0,
            phase: Phase::Selection,
            is_game_started: false,
            is_game_over: false,
            victory_condition: None,
            trait_chooser: Side::Cpu,
            trait_to_choose: true,
            revealed_trait: None,
        }
    }

    /// A freshly dealt game at round 1. The CPU chooses the first trait.
    #[must_use]
    pub fn started(mode: GameMode, player: Pile, cpu: Pile) -> Self {
        let phase = match mode {
            GameMode::Classic => Phase::Idle,
            GameMode::Gamble | GameMode::Pit => Phase::TraitReveal,
        };
        Self {
            cards: Sides::new(player, cpu),
            round_number: 1,
            phase,
            is_game_started: true,
            ..Self::initial(mode)
        }
    }

    /// A side's hand or deck.
    #[must_use]
    pub fn hand(&self, side: Side) -> &Pile {
        &self.cards[side]
    }

    /// Cards a side controls: hand plus won pile.
    #[must_use]
    pub fn card_count(&self, side: Side) -> usize {
        self.cards[side].len() + self.won[side].len()
    }

    /// The active round, or `NoActiveRound`.
    pub fn round(&self) -> Result<&Round> {
        self.current_round.as_ref().ok_or(EngineError::NoActiveRound)
    }

    pub(crate) fn ensure_running(&self) -> Result<()> {
        if self.is_game_over {
            return Err(EngineError::GameAlreadyOver);
        }
        Ok(())
    }

    pub(crate) fn expect_phase(&self, action: &'static str, allowed: &[Phase]) -> Result<()> {
        self.ensure_running()?;
        if !allowed.contains(&self.phase) {
            return Err(EngineError::WrongPhase {
                action,
                phase: self.phase,
            });
        }
        Ok(())
    }

    /// Freeze the game with a victory condition.
    pub(crate) fn finish(&mut self, condition: VictoryCondition) {
        self.victory_condition = Some(condition);
        self.is_game_over = true;
        self.is_game_started = false;
        self.current_round = None;
        self.phase = Phase::GameOver;
    }
}
