//! Engine error type.
//!
//! Errors only arise from caller misuse (wrong phase, unknown template,
//! a card that is not in hand) or from the stats snapshot codec. Running
//! out of cards is a terminal game state, never an error.

use thiserror::Error;

use super::side::Side;
use super::state::{GameMode, Phase};
use crate::cards::CardId;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("template \"{0}\" not found")]
    TemplateNotFound(String),
    #[error("no round in progress")]
    NoActiveRound,
    #[error("{action} is not allowed in phase {phase:?}")]
    WrongPhase { action: &'static str, phase: Phase },
    #[error("a prediction must be made before selecting a card")]
    PredictionMissing,
    #[error("{0} is not in the player's hand")]
    CardNotInHand(CardId),
    #[error("{0} has no cards to play")]
    EmptyHand(Side),
    #[error("{0} does not choose the trait this round")]
    NotTraitChooser(Side),
    #[error("{found:?} game passed to {expected:?} rules")]
    WrongMode { expected: GameMode, found: GameMode },
    #[error("the game is already over")]
    GameAlreadyOver,
    #[error("the current round has not been revealed yet")]
    RoundUnresolved,
    #[error("stats snapshot codec failed")]
    StatsCodec(#[from] bincode::Error),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
