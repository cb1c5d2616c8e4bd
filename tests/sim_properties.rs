//! Property tests for the simulation invariants

use proptest::prelude::*;

use table_pong::config::MatchConfig;
use table_pong::sim::{KeyStates, MatchState, TickInput, tick};

fn key_states() -> impl Strategy<Value = KeyStates> {
    (any::<bool>(), any::<bool>()).prop_map(|(down, up)| KeyStates { down, up })
}

fn tick_input() -> impl Strategy<Value = TickInput> {
    (key_states(), key_states(), any::<bool>()).prop_map(|(player1, player2, idle_mode)| {
        TickInput {
            player1,
            player2,
            idle_mode,
        }
    })
}

proptest! {
    #[test]
    fn player_centers_stay_within_travel_bounds(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(tick_input(), 1..200),
        dt in 0.0f32..0.5,
    ) {
        let mut state = MatchState::new(&MatchConfig::default(), seed).unwrap();
        for input in &inputs {
            tick(&mut state, input, dt);
            prop_assert!(state.player1.center.y >= state.player1.center_lower);
            prop_assert!(state.player1.center.y <= state.player1.center_upper);
            prop_assert!(state.player2.center.y >= state.player2.center_lower);
            prop_assert!(state.player2.center.y <= state.player2.center_upper);
        }
    }

    #[test]
    fn ball_speed_never_changes(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(tick_input(), 1..200),
    ) {
        let mut state = MatchState::new(&MatchConfig::default(), seed).unwrap();
        let speed = state.ball.speed;
        for input in &inputs {
            tick(&mut state, input, table_pong::consts::SIM_DT);
            prop_assert_eq!(state.ball.speed, speed);
            prop_assert!((state.ball.velocity().length() - speed).abs() < 1e-3);
        }
    }

    #[test]
    fn ball_stays_within_vertical_bounds(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(tick_input(), 1..200),
        dt in 0.0f32..0.5,
    ) {
        let mut state = MatchState::new(&MatchConfig::default(), seed).unwrap();
        for input in &inputs {
            tick(&mut state, input, dt);
            prop_assert!(state.ball.center.y >= state.ball.center_down);
            prop_assert!(state.ball.center.y <= state.ball.center_upper);
        }
    }

    #[test]
    fn same_seed_same_match(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(tick_input(), 1..100),
    ) {
        let mut a = MatchState::new(&MatchConfig::default(), seed).unwrap();
        let mut b = MatchState::new(&MatchConfig::default(), seed).unwrap();
        for input in &inputs {
            tick(&mut a, input, table_pong::consts::SIM_DT);
            tick(&mut b, input, table_pong::consts::SIM_DT);
        }
        prop_assert_eq!(a, b);
    }
}
