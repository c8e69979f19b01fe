//! Shared builders for the integration tests.
#![allow(dead_code)]

use compare_engine::{Card, CardId, CardTemplate, GameMode, GameState, Pile, Variation};

/// A card with exact stats (speed, power, grip, weight).
pub fn card(id: u32, stats: [i32; 4]) -> Card {
    let template = CardTemplate::new(format!("Car{id}"), stats);
    Card::from_template(CardId::new(id), &template, Variation::default())
}

/// Player cards get ids from 1, CPU cards from 101.
pub fn started(mode: GameMode, player: &[[i32; 4]], cpu: &[[i32; 4]]) -> GameState {
    let player: Pile = player
        .iter()
        .enumerate()
        .map(|(i, s)| card(i as u32 + 1, *s))
        .collect();
    let cpu: Pile = cpu
        .iter()
        .enumerate()
        .map(|(i, s)| card(i as u32 + 101, *s))
        .collect();
    GameState::started(mode, player, cpu)
}
