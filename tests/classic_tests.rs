//! Classic mode end-to-end tests.

mod common;

use compare_engine::games::{classic, new_classic_game};
use compare_engine::{
    CardCatalog, EngineError, GameMode, GameRng, Outcome, Phase, RulesConfig, Side, Trait,
    VictoryCondition,
};

use common::started;

/// Six unique cards, 90 vs 40 speed on top.
#[test]
fn test_player_takes_both_cards() {
    let state = started(
        GameMode::Classic,
        &[[90, 60, 70, 1200], [70, 70, 70, 1500], [60, 80, 60, 1800]],
        &[[40, 95, 80, 2100], [75, 65, 85, 1400], [55, 85, 70, 2000]],
    );

    let next = classic::select_attribute(&state, Trait::Speed).unwrap();

    assert_eq!(next.round().unwrap().outcome(), Some(Outcome::Player));
    assert_eq!(next.won.player.len(), 2);
    assert_eq!(next.won.player[0].id, state.cards.player[0].id);
    assert_eq!(next.won.player[1].id, state.cards.cpu[0].id);
    assert_eq!(next.cards.player.len(), 2);
    assert_eq!(next.cards.cpu.len(), 2);
}

/// Outcome is Draw exactly when the compared values match.
#[test]
fn test_outcome_matches_values() {
    let mut rng = GameRng::new(11);
    let catalog = CardCatalog::builtin();

    for _ in 0..20 {
        let mut state = new_classic_game(&catalog, &RulesConfig::default(), &mut rng);
        for t in [Trait::Speed, Trait::Power, Trait::Grip] {
            let battle = classic::select_attribute(&state, t).unwrap();
            let round = battle.round().unwrap();
            let resolution = round.resolution.as_ref().unwrap();
            let expected = match resolution.values.player.cmp(&resolution.values.cpu) {
                std::cmp::Ordering::Greater => Outcome::Player,
                std::cmp::Ordering::Less => Outcome::Cpu,
                std::cmp::Ordering::Equal => Outcome::Draw,
            };
            assert_eq!(resolution.outcome, expected);
            state = classic::process_round_result(&battle).unwrap();
        }
        assert!(state.is_game_over);
    }
}

#[test]
fn test_full_game() {
    let mut rng = GameRng::new(5);
    let mut state = new_classic_game(&CardCatalog::builtin(), &RulesConfig::default(), &mut rng);
    let mut rounds = 0;

    while !state.is_game_over {
        assert_eq!(state.phase, Phase::Idle);
        let battle = classic::select_attribute(&state, Trait::Grip).unwrap();
        state = classic::process_round_result(&battle).unwrap();
        rounds += 1;
    }

    assert_eq!(rounds, 3);
    assert_eq!(state.victory_condition, Some(VictoryCondition::GameOver));
    assert!(state.cards.player.is_empty());

    let total = state.card_count(Side::Player) + state.card_count(Side::Cpu);
    assert!(total <= 6);
    assert_eq!(total % 2, 0);

    let expected = Outcome::compare(
        state.card_count(Side::Player) as i32,
        state.card_count(Side::Cpu) as i32,
    );
    assert_eq!(classic::final_outcome(&state), expected);
}

#[test]
fn test_process_without_battle() {
    let state = started(GameMode::Classic, &[[90, 60, 70, 1200]], &[[40, 95, 80, 2100]]);
    assert!(matches!(
        classic::process_round_result(&state),
        Err(EngineError::WrongPhase { .. })
    ));
}
