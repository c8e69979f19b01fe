//! Shared round skeleton for the higher/lower modes.
//!
//! Phases:
//!
//! ```text
//! deck play: TraitReveal -> Prediction -> Reveal -> TraitReveal | GameOver
//! hand play: TraitReveal -> Prediction -> CardSelection -> Reveal -> Result -> TraitReveal | GameOver
//! ```
//!
//! Every transition takes the current state by reference and returns the
//! next one. Invalid calls return an error and leave the caller's state
//! untouched. A state dealt for another mode is rejected with `WrongMode`.

use tracing::{debug, info};

use super::engine::{judge, CardSource, PredictRules};
use crate::cards::{Card, CardId, Prediction, Trait};
use crate::core::{
    shuffle, EngineError, GameState, Outcome, Phase, Pile, RandomSource, Resolution, Result,
    Round, Side, Sides,
};

/// Round driver for one higher/lower mode.
#[derive(Clone, Debug, Default)]
pub struct PredictGame<R> {
    rules: R,
}

impl<R: PredictRules> PredictGame<R> {
    #[must_use]
    pub fn new(rules: R) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Begin the next round.
    ///
    /// Ends the game if a pile is already exhausted. Otherwise, when the
    /// CPU owns the trait choice it picks now and the round opens in
    /// `Prediction`; when the player owns it the state stays in
    /// `TraitReveal` until `select_trait`.
    pub fn start_new_round(&self, state: &GameState, rng: &mut dyn RandomSource) -> Result<GameState> {
        self.check_mode(state)?;
        state.expect_phase("start_new_round", &[Phase::TraitReveal])?;
        let mut next = state.clone();

        if let Some(condition) = self.rules.victory(&next) {
            info!(mode = ?next.mode, ?condition, round = next.round_number, "game over before round start");
            next.finish(condition);
            return Ok(next);
        }

        debug!(round = next.round_number, chooser = %next.trait_chooser, "starting round");

        if !next.trait_to_choose {
            if let Some(revealed) = next.revealed_trait {
                open_round(&mut next, revealed);
                return Ok(next);
            }
        }

        match next.trait_chooser {
            Side::Cpu => {
                let revealed = self.rules.choose_trait(&next, rng);
                debug!(%revealed, "cpu chose trait");
                open_round(&mut next, revealed);
            }
            Side::Player => {
                next.revealed_trait = None;
                next.trait_to_choose = true;
                next.current_round = None;
                next.phase = Phase::TraitReveal;
            }
        }

        Ok(next)
    }

    /// The player picks the trait on their turn.
    pub fn select_trait(&self, state: &GameState, revealed: Trait) -> Result<GameState> {
        self.check_mode(state)?;
        state.expect_phase("select_trait", &[Phase::TraitReveal])?;
        if state.trait_chooser != Side::Player {
            return Err(EngineError::NotTraitChooser(Side::Player));
        }

        debug!(%revealed, "player chose trait");
        let mut next = state.clone();
        open_round(&mut next, revealed);
        Ok(next)
    }

    /// Commit the player's prediction; the CPU commits its own.
    ///
    /// With deck play the cards are flipped and the round is resolved
    /// immediately (`Reveal`). With hand play the round moves on to
    /// `CardSelection`.
    pub fn make_prediction(
        &self,
        state: &GameState,
        prediction: Prediction,
        rng: &mut dyn RandomSource,
    ) -> Result<GameState> {
        self.check_mode(state)?;
        state.ensure_running()?;
        let round = state.round()?;
        state.expect_phase("make_prediction", &[Phase::Prediction])?;

        let cpu_prediction = self.rules.choose_prediction(round.revealed_trait, rng);
        debug!(player = ?prediction, cpu = ?cpu_prediction, "predictions committed");

        let mut next = state.clone();
        let mut round = round.clone();
        round.predictions = Sides::new(Some(prediction), Some(cpu_prediction));

        match self.rules.card_source() {
            CardSource::HandChoice => {
                next.current_round = Some(round);
                next.phase = Phase::CardSelection;
            }
            CardSource::DeckTop => {
                for side in Side::BOTH {
                    let card = next.cards[side]
                        .pop_front()
                        .ok_or(EngineError::EmptyHand(side))?;
                    round.cards[side] = Some(card);
                }
                next.current_round = Some(self.resolve(round)?);
                next.phase = Phase::Reveal;
            }
        }

        Ok(next)
    }

    /// The player picks a card from hand; the CPU picks its own.
    pub fn select_card(&self, state: &GameState, card: CardId) -> Result<GameState> {
        self.check_mode(state)?;
        state.ensure_running()?;
        let round = state.round()?;
        if state.phase == Phase::Prediction {
            return Err(EngineError::PredictionMissing);
        }
        state.expect_phase("select_card", &[Phase::CardSelection])?;

        let player_card = state.cards[Side::Player]
            .iter()
            .find(|c| c.id == card)
            .cloned()
            .ok_or(EngineError::CardNotInHand(card))?;

        let cpu_hand = &state.cards[Side::Cpu];
        let cpu_index = self
            .rules
            .choose_card(cpu_hand, round.revealed_trait)
            .ok_or(EngineError::EmptyHand(Side::Cpu))?;
        let cpu_card = cpu_hand[cpu_index].clone();

        debug!(player = %player_card, cpu = %cpu_card, "cards selected");

        let mut round = round.clone();
        round.cards = Sides::new(Some(player_card), Some(cpu_card));

        let mut next = state.clone();
        next.current_round = Some(round);
        next.phase = Phase::Reveal;
        Ok(next)
    }

    /// Flip the chosen cards and resolve the round.
    pub fn reveal(&self, state: &GameState) -> Result<GameState> {
        self.check_mode(state)?;
        state.ensure_running()?;
        let round = state.round()?;
        state.expect_phase("reveal", &[Phase::Reveal])?;
        if round.is_resolved() {
            return Err(EngineError::WrongPhase {
                action: "reveal",
                phase: state.phase,
            });
        }

        let mut next = state.clone();
        next.current_round = Some(self.resolve(round.clone())?);
        next.phase = Phase::Result;
        Ok(next)
    }

    /// Score the resolved round into the game and set up the next one.
    ///
    /// Cards not kept leave their owner's hand, pit cards are added and the
    /// pit reshuffled. If a victory condition now holds the game is frozen;
    /// otherwise the trait choice passes to the other side.
    pub fn process_round_result(
        &self,
        state: &GameState,
        rng: &mut dyn RandomSource,
    ) -> Result<GameState> {
        self.check_mode(state)?;
        state.ensure_running()?;
        let round = state.round()?;
        let resolution = round.resolution.as_ref().ok_or(EngineError::RoundUnresolved)?;

        let mut next = state.clone();

        for side in Side::BOTH {
            if resolution.keeps[side] {
                next.scores[side] += 1;
            } else if self.rules.card_source() == CardSource::HandChoice {
                if let Some(card) = &round.cards[side] {
                    remove_card(&mut next.cards[side], card.id);
                }
            }
        }

        if !resolution.cards_to_pit.is_empty() {
            next.pit.extend(resolution.cards_to_pit.iter().cloned());
            let mut pit: Vec<Card> = next.pit.iter().cloned().collect();
            shuffle(rng, &mut pit);
            next.pit = pit.into_iter().collect();
        }

        next.current_round = None;

        if let Some(condition) = self.rules.victory(&next) {
            info!(
                mode = ?next.mode,
                ?condition,
                rounds = next.round_number,
                player_score = next.scores.player,
                cpu_score = next.scores.cpu,
                "game over"
            );
            next.finish(condition);
        } else {
            next.round_number += 1;
            next.trait_chooser = next.trait_chooser.opponent();
            next.trait_to_choose = true;
            next.revealed_trait = None;
            next.phase = Phase::TraitReveal;
        }

        debug!(
            player_cards = next.cards.player.len(),
            cpu_cards = next.cards.cpu.len(),
            pit = next.pit.len(),
            "round processed"
        );

        Ok(next)
    }

    fn check_mode(&self, state: &GameState) -> Result<()> {
        let expected = self.rules.mode();
        if state.mode != expected {
            return Err(EngineError::WrongMode {
                expected,
                found: state.mode,
            });
        }
        Ok(())
    }

    fn resolve(&self, mut round: Round) -> Result<Round> {
        let (Some(player_card), Some(cpu_card)) = (round.cards.player.clone(), round.cards.cpu.clone())
        else {
            return Err(EngineError::RoundUnresolved);
        };
        let (Some(player_prediction), Some(cpu_prediction)) =
            (round.predictions.player, round.predictions.cpu)
        else {
            return Err(EngineError::PredictionMissing);
        };

        let revealed = round.revealed_trait;
        let values = Sides::new(player_card.value(revealed), cpu_card.value(revealed));
        let judgement = judge(&Sides::new(player_prediction, cpu_prediction), &values);
        let cards_to_pit = self
            .rules
            .resolve_outcome(&Sides::new(player_card, cpu_card), &judgement.keeps);

        debug!(
            %revealed,
            player_value = values.player,
            cpu_value = values.cpu,
            player_correct = judgement.correct.player,
            cpu_correct = judgement.correct.cpu,
            to_pit = cards_to_pit.len(),
            "round revealed"
        );

        round.resolution = Some(Resolution {
            values,
            correct: judgement.correct,
            keeps: judgement.keeps,
            cards_to_pit,
            outcome: Outcome::from_keeps(&judgement.keeps),
        });
        Ok(round)
    }
}

fn open_round(state: &mut GameState, revealed: Trait) {
    state.revealed_trait = Some(revealed);
    state.trait_to_choose = false;
    state.current_round = Some(Round::new(state.round_number, revealed));
    state.phase = Phase::Prediction;
}

fn remove_card(pile: &mut Pile, id: CardId) -> Option<Card> {
    let index = pile.iter().position(|c| c.id == id)?;
    Some(pile.remove(index))
}
