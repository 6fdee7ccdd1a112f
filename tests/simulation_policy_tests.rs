mod common;

use common::{Mark, OneShot, TicTacToe};
use duel_mcts::{
    policy::simulation::{HeuristicPolicy, RandomPolicy, SimulationPolicy},
    GameState,
};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn test_random_policy_reaches_terminal_state() {
    let mut rng = StdRng::seed_from_u64(1);
    let state = TicTacToe::new();

    for _ in 0..50 {
        let (terminal, trace) = RandomPolicy::playout(&state, &mut rng);
        assert!(terminal.is_terminal());
        assert_eq!(trace.len(), terminal.moves_played);
        assert!(trace.len() >= 5 && trace.len() <= 9);
    }
}

#[test]
fn test_random_policy_leaves_input_state_untouched() {
    let mut rng = StdRng::seed_from_u64(2);
    let state = TicTacToe::from_rows("X.. .O. ...", Mark::X);
    let before = state.board;

    let policy = RandomPolicy::new();
    for _ in 0..20 {
        let result = policy.simulate(&state, &Mark::X, &mut rng);
        assert!(result == 1.0 || result == -1.0 || result == 0.0);
    }

    assert_eq!(state.board, before);
    assert_eq!(state.moves_played, 2);
}

#[test]
fn test_random_policy_is_reproducible_with_seed() {
    let state = TicTacToe::new();
    let policy = RandomPolicy::new();

    let run = |seed: u64| -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..30)
            .map(|_| policy.simulate(&state, &Mark::O, &mut rng))
            .collect()
    };

    assert_eq!(run(99), run(99));
}

#[test]
fn test_random_policy_samples_actions_uniformly() {
    let mut rng = StdRng::seed_from_u64(3);
    let state = OneShot::new(vec![0.0; 4]);
    let mut counts = [0usize; 4];

    for _ in 0..4_000 {
        let (terminal, trace) = RandomPolicy::playout(&state, &mut rng);
        assert_eq!(trace.len(), 1);
        counts[terminal.chosen.unwrap()] += 1;
    }

    for count in counts {
        assert!(
            (800..=1200).contains(&count),
            "action frequencies should be roughly equal: {:?}",
            counts
        );
    }
}

#[test]
fn test_random_policy_scores_for_requested_player() {
    let mut rng = StdRng::seed_from_u64(4);
    let state = OneShot::new(vec![0.25]);
    let policy = RandomPolicy::new();

    assert_eq!(policy.simulate(&state, &0, &mut rng), 0.25);
    assert_eq!(policy.simulate(&state, &1, &mut rng), -0.25);

    // Terminal input returns its own result without playing
    let terminal = state.apply_action(&0);
    assert_eq!(policy.simulate(&terminal, &0, &mut rng), 0.25);
}

#[test]
fn test_heuristic_policy() {
    let mut rng = StdRng::seed_from_u64(5);
    let state = OneShot::new(vec![0.75, -0.75]);

    let heuristic = |_state: &OneShot, player: &usize| if *player == 0 { 0.42 } else { -0.42 };
    let policy: HeuristicPolicy<_, OneShot> = HeuristicPolicy::new(heuristic);

    assert_eq!(
        policy.simulate(&state, &0, &mut rng),
        0.42,
        "Heuristic function should be used for non-terminal states"
    );
    assert_eq!(policy.simulate(&state, &1, &mut rng), -0.42);

    let terminal_state = state.apply_action(&1);
    assert_eq!(
        policy.simulate(&terminal_state, &0, &mut rng),
        -0.75,
        "Terminal state should use actual result"
    );
}

#[test]
fn test_simulation_policy_cloning() {
    let mut rng = StdRng::seed_from_u64(6);
    let state = OneShot::new(vec![0.5]);

    let boxed: Box<dyn SimulationPolicy<OneShot>> = Box::new(RandomPolicy::new());
    let cloned = boxed.clone_box();

    assert_eq!(cloned.simulate(&state, &0, &mut rng), 0.5);
}
