//! Property-based tests for card generation, prediction rules and rewards.

use compare_engine::cards::{GRIP_RANGE, POWER_RANGE, SPEED_RANGE, WEIGHT_RANGE};
use compare_engine::{
    judge, BattleResult, CardCatalog, GameRng, Prediction, RewardCalculator, Sides, Variation,
};
use proptest::prelude::*;
use rustc_hash::FxHashSet;

fn prediction() -> impl Strategy<Value = Prediction> {
    prop_oneof![Just(Prediction::Higher), Just(Prediction::Lower)]
}

proptest! {
    #[test]
    fn proptest_created_cards_in_bounds(
        index in 0usize..23,
        speed in -500i32..500,
        power in -500i32..500,
        grip in -500i32..500,
        weight in -5000i32..5000
    ) {
        let catalog = CardCatalog::builtin();
        let name = catalog.templates()[index].name.clone();
        let card = catalog
            .create_card(&name, Some(Variation { speed, power, grip, weight }))
            .expect("builtin template");
        prop_assert!(SPEED_RANGE.contains(&card.speed));
        prop_assert!(POWER_RANGE.contains(&card.power));
        prop_assert!(GRIP_RANGE.contains(&card.grip));
        prop_assert!(WEIGHT_RANGE.contains(&card.weight));
    }

    #[test]
    fn proptest_card_sets_are_unique(seed in any::<u64>(), count in 0usize..=23) {
        let catalog = CardCatalog::builtin();
        let mut rng = GameRng::new(seed);
        let cards = catalog.create_card_set(count, &mut rng);

        prop_assert_eq!(cards.len(), count);
        let ids: FxHashSet<_> = cards.iter().map(|c| c.id).collect();
        prop_assert_eq!(ids.len(), count);
        prop_assert!(cards.iter().all(|c| c.in_bounds()));
    }

    #[test]
    fn proptest_prediction_rule(
        player in prediction(),
        cpu in prediction(),
        a in 0i32..200,
        b in 0i32..200
    ) {
        let j = judge(&Sides::new(player, cpu), &Sides::new(a, b));

        let player_correct = match player {
            Prediction::Higher => a > b,
            Prediction::Lower => a < b,
        };
        prop_assert_eq!(j.correct.player, player_correct);
        if a == b {
            prop_assert!(!j.correct.player && !j.correct.cpu);
        }

        if j.correct.player && j.correct.cpu {
            prop_assert_eq!(j.keeps, Sides::new(a >= b, b >= a));
        } else {
            prop_assert_eq!(j.keeps, j.correct);
        }
    }

    #[test]
    fn proptest_streak_monotonic(streak in 0u32..100) {
        let calc = RewardCalculator::default();
        prop_assert!(calc.streak_multiplier(streak + 1) >= calc.streak_multiplier(streak));
        let expected = match streak {
            0..=1 => 1,
            2 => 2,
            3..=4 => 3,
            _ => 5,
        };
        prop_assert_eq!(calc.streak_multiplier(streak), expected);
    }

    #[test]
    fn proptest_reward_invariants(
        player_wins in 0u32..6,
        cpu_wins in 0u32..6,
        comeback in any::<bool>(),
        streak in 0u32..10
    ) {
        let result = BattleResult {
            player_wins,
            cpu_wins,
            is_perfect_win: cpu_wins == 0 && player_wins > 0,
            is_comeback_win: comeback && player_wins > cpu_wins,
            rounds: Vec::new(),
        };
        let calc = RewardCalculator::default();

        if calc.base_points(&result) > 0 {
            prop_assert!(player_wins > cpu_wins);
        }
        let rewards = calc.generate(&result, streak);
        prop_assert!(rewards.iter().all(|r| r.amount > 0));
    }
}
