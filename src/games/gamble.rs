//! Gamble mode: higher/lower over two decks.
//!
//! Each round flips the top of both decks. Played cards are consumed and
//! nothing goes to the pit; a correct call scores a point. The game ends
//! when either deck runs out.

use smallvec::SmallVec;

use crate::cards::{Card, Trait};
use crate::core::{GameMode, GameState, Pile, RandomSource, Side, Sides, VictoryCondition};
use crate::rules::{CardSource, PredictGame, PredictRules};

/// Gamble strategy: uniformly random CPU trait and prediction.
#[derive(Clone, Copy, Debug, Default)]
pub struct GambleRules;

/// The gamble round driver.
pub type GambleGame = PredictGame<GambleRules>;

impl GambleGame {
    #[must_use]
    pub fn gamble() -> Self {
        PredictGame::new(GambleRules)
    }
}

impl PredictRules for GambleRules {
    fn mode(&self) -> GameMode {
        GameMode::Gamble
    }

    fn card_source(&self) -> CardSource {
        CardSource::DeckTop
    }

    fn choose_trait(&self, _state: &GameState, rng: &mut dyn RandomSource) -> Trait {
        Trait::ALL[rng.gen_range_usize(0..Trait::ALL.len())]
    }

    fn choose_card(&self, pile: &Pile, _revealed: Trait) -> Option<usize> {
        (!pile.is_empty()).then_some(0)
    }

    fn resolve_outcome(&self, _cards: &Sides<Card>, _keeps: &Sides<bool>) -> SmallVec<[Card; 2]> {
        SmallVec::new()
    }

    fn victory(&self, state: &GameState) -> Option<VictoryCondition> {
        Side::BOTH
            .iter()
            .any(|&side| state.cards[side].is_empty())
            .then_some(VictoryCondition::GameOver)
    }
}
