//! Pit mode: higher/lower over hands, wrong calls lose the card.
//!
//! Both sides keep a hand and choose which card to play each round. A side
//! whose prediction fails sends its played card to the shared pit, where
//! it stays for the rest of the game. The CPU plays greedily:
//! - Trait: the one where its best card is strongest
//! - Card: its strongest card for the revealed trait
//!
//! Victory is checked after every round:
//! - `CardCollection`: the CPU hand is empty, the player's is not
//! - `Survival`: the player's hand is empty, the CPU's is not
//! - `GameOver`: both hands are empty

use smallvec::SmallVec;

use crate::cards::{Card, Trait};
use crate::core::{GameMode, GameState, Pile, RandomSource, Side, Sides, VictoryCondition};
use crate::rules::{CardSource, PredictGame, PredictRules};

/// Pit strategy: greedy CPU trait and card, random CPU prediction.
#[derive(Clone, Copy, Debug, Default)]
pub struct PitRules;

/// The pit round driver.
pub type PitGame = PredictGame<PitRules>;

impl PitGame {
    #[must_use]
    pub fn pit() -> Self {
        PredictGame::new(PitRules)
    }
}

/// Index of the first card with the highest value for `revealed`.
fn strongest(pile: &Pile, revealed: Trait) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (index, card) in pile.iter().enumerate() {
        let value = card.value(revealed);
        if best.map_or(true, |(_, top)| value > top) {
            best = Some((index, value));
        }
    }
    best.map(|(index, _)| index)
}

impl PredictRules for PitRules {
    fn mode(&self) -> GameMode {
        GameMode::Pit
    }

    fn card_source(&self) -> CardSource {
        CardSource::HandChoice
    }

    fn choose_trait(&self, state: &GameState, _rng: &mut dyn RandomSource) -> Trait {
        let hand = &state.cards[Side::Cpu];
        let mut best = (Trait::ALL[0], i32::MIN);
        for t in Trait::ALL {
            let top = hand.iter().map(|c| c.value(t)).max().unwrap_or(i32::MIN);
            if top > best.1 {
                best = (t, top);
            }
        }
        best.0
    }

    fn choose_card(&self, pile: &Pile, revealed: Trait) -> Option<usize> {
        strongest(pile, revealed)
    }

    fn resolve_outcome(&self, cards: &Sides<Card>, keeps: &Sides<bool>) -> SmallVec<[Card; 2]> {
        Side::BOTH
            .iter()
            .filter(|&&side| !keeps[side])
            .map(|&side| cards[side].clone())
            .collect()
    }

    fn victory(&self, state: &GameState) -> Option<VictoryCondition> {
        match (state.cards.player.is_empty(), state.cards.cpu.is_empty()) {
            (false, true) => Some(VictoryCondition::CardCollection),
            (true, false) => Some(VictoryCondition::Survival),
            (true, true) => Some(VictoryCondition::GameOver),
            (false, false) => None,
        }
    }
}
