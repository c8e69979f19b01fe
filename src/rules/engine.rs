//! Strategy trait for the higher/lower modes.
//!
//! Gamble and pit mode run the same round skeleton
//! (`PredictGame`); a `PredictRules` implementation supplies what differs:
//! - How the CPU picks the trait, its prediction and its card
//! - Where played cards come from (deck top or a chosen hand card)
//! - Which cards an outcome sends to the pit
//! - When the game is over

use smallvec::SmallVec;

use crate::cards::{Card, Prediction, Trait};
use crate::core::{GameMode, GameState, Pile, RandomSource, Sides, VictoryCondition};

/// Where each round's played cards come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardSource {
    /// Both sides flip the top of their deck; played cards are consumed.
    DeckTop,
    /// Both sides choose a card from hand; kept cards return to hand.
    HandChoice,
}

/// Mode-specific decisions plugged into the shared round skeleton.
pub trait PredictRules {
    fn mode(&self) -> GameMode;

    fn card_source(&self) -> CardSource;

    /// The CPU's trait when it owns the choice.
    fn choose_trait(&self, state: &GameState, rng: &mut dyn RandomSource) -> Trait;

    /// The CPU's higher/lower call. Made before any card is revealed.
    fn choose_prediction(&self, _revealed: Trait, rng: &mut dyn RandomSource) -> Prediction {
        if rng.gen_bool(0.5) {
            Prediction::Higher
        } else {
            Prediction::Lower
        }
    }

    /// Index of the CPU's card in its pile, `None` if the pile is empty.
    fn choose_card(&self, pile: &Pile, revealed: Trait) -> Option<usize>;

    /// Cards that leave play given who keeps their card.
    fn resolve_outcome(&self, cards: &Sides<Card>, keeps: &Sides<bool>) -> SmallVec<[Card; 2]>;

    /// Terminal check, run before every round and after every result.
    fn victory(&self, state: &GameState) -> Option<VictoryCondition>;
}

/// Prediction correctness and card keeping for one reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Judgement {
    pub correct: Sides<bool>,
    pub keeps: Sides<bool>,
}

/// Evaluate both predictions against the revealed values.
///
/// A side keeps its card iff its prediction was correct. When both are
/// correct the strictly larger value keeps alone; equal values keep both.
#[must_use]
pub fn judge(predictions: &Sides<Prediction>, values: &Sides<i32>) -> Judgement {
    let correct = Sides::new(
        predictions.player.holds(values.player, values.cpu),
        predictions.cpu.holds(values.cpu, values.player),
    );

    let keeps = if correct.player && correct.cpu {
        Sides::new(values.player >= values.cpu, values.cpu >= values.player)
    } else {
        correct
    };

    Judgement { correct, keeps }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Prediction::{Higher, Lower};

    #[test]
    fn test_only_player_correct() {
        let j = judge(&Sides::new(Higher, Higher), &Sides::new(80, 60));
        assert_eq!(j.correct, Sides::new(true, false));
        assert_eq!(j.keeps, Sides::new(true, false));
    }

    #[test]
    fn test_neither_correct() {
        let j = judge(&Sides::new(Lower, Higher), &Sides::new(80, 60));
        assert_eq!(j.correct, Sides::new(false, false));
        assert_eq!(j.keeps, Sides::new(false, false));
    }

    #[test]
    fn test_equal_values_both_wrong() {
        let j = judge(&Sides::new(Higher, Lower), &Sides::new(70, 70));
        assert_eq!(j.correct, Sides::new(false, false));
        assert_eq!(j.keeps, Sides::new(false, false));
    }

    #[test]
    fn test_both_correct_larger_value_keeps() {
        let j = judge(&Sides::new(Higher, Lower), &Sides::new(80, 60));
        assert_eq!(j.correct, Sides::new(true, true));
        assert_eq!(j.keeps, Sides::new(true, false));

        let j = judge(&Sides::new(Lower, Higher), &Sides::new(55, 95));
        assert_eq!(j.correct, Sides::new(true, true));
        assert_eq!(j.keeps, Sides::new(false, true));
    }
}
