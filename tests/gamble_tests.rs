//! Gamble mode end-to-end tests.

mod common;

use compare_engine::games::new_gamble_game;
use compare_engine::{
    CardCatalog, GambleGame, GameMode, GameRng, Outcome, Phase, Prediction, RulesConfig,
    ScriptedRng, Side, Sides, Trait, VictoryCondition,
};

use common::started;

/// Power 60 vs 95: a player calling higher is wrong, a CPU calling higher is right.
#[test]
fn test_only_cpu_prediction_holds() {
    let game = GambleGame::gamble();
    let mut state = started(
        GameMode::Gamble,
        &[[70, 60, 70, 1200], [70, 60, 70, 1200]],
        &[[60, 95, 70, 1200], [60, 95, 70, 1200]],
    );
    state.trait_chooser = Side::Player;
    let mut rng = ScriptedRng::new().with_bools([true]);

    let state = game.start_new_round(&state, &mut rng).unwrap();
    let state = game.select_trait(&state, Trait::Power).unwrap();
    let state = game.make_prediction(&state, Prediction::Higher, &mut rng).unwrap();

    let round = state.round().unwrap();
    assert_eq!(round.predictions, Sides::new(Some(Prediction::Higher), Some(Prediction::Higher)));
    let resolution = round.resolution.as_ref().unwrap();
    assert_eq!(resolution.correct, Sides::new(false, true));
    assert_eq!(resolution.keeps, Sides::new(false, true));
    assert_eq!(resolution.outcome, Outcome::Cpu);
}

#[test]
fn test_full_game_consumes_decks() {
    let game = GambleGame::gamble();
    let catalog = CardCatalog::builtin();

    for seed in 0..10 {
        let mut rng = GameRng::new(seed);
        let mut state = new_gamble_game(&catalog, &RulesConfig::default(), &mut rng);
        let deck_size = state.cards.player.len().min(state.cards.cpu.len());
        let mut rounds = 0;
        let mut expected_chooser = Side::Cpu;

        loop {
            state = game.start_new_round(&state, &mut rng).unwrap();
            if state.is_game_over {
                break;
            }
            assert_eq!(state.trait_chooser, expected_chooser);
            if state.phase == Phase::TraitReveal {
                state = game.select_trait(&state, Trait::Speed).unwrap();
            }
            assert_eq!(state.phase, Phase::Prediction);

            state = game.make_prediction(&state, Prediction::Lower, &mut rng).unwrap();
            assert_eq!(state.phase, Phase::Reveal);
            state = game.process_round_result(&state, &mut rng).unwrap();

            rounds += 1;
            expected_chooser = expected_chooser.opponent();
            if state.is_game_over {
                break;
            }
        }

        assert!(rounds <= deck_size);
        assert_eq!(rounds, deck_size);
        assert_eq!(state.victory_condition, Some(VictoryCondition::GameOver));
        assert!(state.pit.is_empty());
        assert!(state.scores.player as usize + state.scores.cpu as usize <= 2 * rounds);
    }
}

#[test]
fn test_input_state_unchanged() {
    let game = GambleGame::gamble();
    let state = started(GameMode::Gamble, &[[70, 60, 70, 1200]], &[[60, 95, 70, 1200]]);
    let before = state.clone();
    let mut rng = ScriptedRng::new();

    let opened = game.start_new_round(&state, &mut rng).unwrap();
    let _ = game.make_prediction(&opened, Prediction::Higher, &mut rng).unwrap();

    assert_eq!(state, before);
    assert_eq!(opened.cards.player.len(), 1);
}
