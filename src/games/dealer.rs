//! Dealing a fresh game for each mode.

use tracing::info;

use crate::cards::{Card, CardCatalog};
use crate::core::{shuffle, GameMode, GameState, Pile, RandomSource, RulesConfig};

/// Classic: two hands of `hand_size` cards from one unique set.
pub fn new_classic_game<R>(catalog: &CardCatalog, config: &RulesConfig, rng: &mut R) -> GameState
where
    R: RandomSource + ?Sized,
{
    deal_hands(GameMode::Classic, catalog, config, rng)
}

/// Pit: same deal as classic.
pub fn new_pit_game<R>(catalog: &CardCatalog, config: &RulesConfig, rng: &mut R) -> GameState
where
    R: RandomSource + ?Sized,
{
    deal_hands(GameMode::Pit, catalog, config, rng)
}

/// Gamble: a `gamble_deck_size` set, shuffled and split in half.
///
/// With an odd set the CPU deck gets the extra card.
pub fn new_gamble_game<R>(catalog: &CardCatalog, config: &RulesConfig, rng: &mut R) -> GameState
where
    R: RandomSource + ?Sized,
{
    let mut set = catalog.create_card_set(config.gamble_deck_size, rng);
    shuffle(rng, &mut set);
    let half = set.len() / 2;
    let cpu: Pile = set.split_off(half).into_iter().collect();
    let player: Pile = set.into_iter().collect();

    info!(player = player.len(), cpu = cpu.len(), "dealt gamble decks");
    GameState::started(GameMode::Gamble, player, cpu)
}

fn deal_hands<R>(mode: GameMode, catalog: &CardCatalog, config: &RulesConfig, rng: &mut R) -> GameState
where
    R: RandomSource + ?Sized,
{
    let mut set: Vec<Card> = catalog.create_card_set(config.hand_size * 2, rng);
    let split = config.hand_size.min(set.len());
    let cpu: Pile = set.split_off(split).into_iter().collect();
    let player: Pile = set.into_iter().collect();

    info!(?mode, player = player.len(), cpu = cpu.len(), "dealt hands");
    GameState::started(mode, player, cpu)
}
