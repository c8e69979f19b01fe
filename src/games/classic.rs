//! Classic mode: both sides flip their top card and compare one trait.
//!
//! ```text
//! Idle -> Battle -> Idle | GameOver
//! ```
//!
//! The round winner takes both cards into its won pile. A draw removes
//! both cards from play. The game ends once the player's hand is empty and
//! the side controlling more cards (won pile plus hand) wins.

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::cards::Trait;
use crate::core::{
    EngineError, GameState, Outcome, Phase, Resolution, Result, Round, Side, Sides,
    VictoryCondition,
};

/// Compare both top cards on `attribute` and move them to the winner.
///
/// An empty hand at this point ends the game instead of playing a round.
pub fn select_attribute(state: &GameState, attribute: Trait) -> Result<GameState> {
    state.expect_phase("select_attribute", &[Phase::Idle])?;

    let mut next = state.clone();
    if Side::BOTH.iter().any(|&side| next.cards[side].is_empty()) {
        info!(
            player_cards = next.cards.player.len(),
            cpu_cards = next.cards.cpu.len(),
            "classic game over before battle"
        );
        next.finish(VictoryCondition::GameOver);
        return Ok(next);
    }

    let player_card = next.cards[Side::Player]
        .pop_front()
        .ok_or(EngineError::EmptyHand(Side::Player))?;
    let cpu_card = next.cards[Side::Cpu]
        .pop_front()
        .ok_or(EngineError::EmptyHand(Side::Cpu))?;

    let values = Sides::new(player_card.value(attribute), cpu_card.value(attribute));
    let outcome = Outcome::compare(values.player, values.cpu);

    debug!(
        %attribute,
        player = %player_card,
        cpu = %cpu_card,
        player_value = values.player,
        cpu_value = values.cpu,
        ?outcome,
        "battle"
    );

    if let Some(winner) = outcome.winner() {
        next.won[winner].push_back(player_card.clone());
        next.won[winner].push_back(cpu_card.clone());
        next.scores[winner] += 1;
    }

    let mut round = Round::new(next.round_number, attribute);
    round.cards = Sides::new(Some(player_card), Some(cpu_card));
    round.resolution = Some(Resolution {
        values,
        correct: Sides::default(),
        keeps: Sides::new(outcome == Outcome::Player, outcome == Outcome::Cpu),
        cards_to_pit: SmallVec::new(),
        outcome,
    });

    next.revealed_trait = Some(attribute);
    next.current_round = Some(round);
    next.phase = Phase::Battle;
    Ok(next)
}

/// Close the battle: next round, or game over once the player's hand is empty.
pub fn process_round_result(state: &GameState) -> Result<GameState> {
    state.expect_phase("process_round_result", &[Phase::Battle])?;
    state.round()?;

    let mut next = state.clone();
    next.current_round = None;
    next.revealed_trait = None;

    if next.cards[Side::Player].is_empty() {
        info!(
            rounds = next.round_number,
            player_cards = next.card_count(Side::Player),
            cpu_cards = next.card_count(Side::Cpu),
            "classic game over"
        );
        next.finish(VictoryCondition::GameOver);
    } else {
        next.round_number += 1;
        next.phase = Phase::Idle;
    }

    Ok(next)
}

/// Winner by controlled cards. Equal totals draw.
#[must_use]
pub fn final_outcome(state: &GameState) -> Outcome {
    let count = |side| i32::try_from(state.card_count(side)).unwrap_or(i32::MAX);
    Outcome::compare(count(Side::Player), count(Side::Cpu))
}
