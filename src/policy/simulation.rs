//! Simulation policies for the MCTS algorithm
//!
//! Simulation policies estimate how good a position is for a given player.
//! The default plays uniformly random moves to the end of the game; anything
//! else that maps a state to an outcome (a heuristic, a value network) can be
//! plugged in instead.

use rand::{seq::SliceRandom, RngCore};

use crate::game_state::GameState;

/// Trait for policies that evaluate a position
pub trait SimulationPolicy<S: GameState> {
    /// Estimates the outcome of `state` for `for_player`
    ///
    /// `state` belongs to the tree and must not be altered; implementations
    /// that need to play moves work on their own copy. All randomness must be
    /// drawn from `rng` so seeded searches are reproducible.
    fn simulate(&self, state: &S, for_player: &S::Player, rng: &mut dyn RngCore) -> f64;

    /// Create a boxed clone of this policy
    fn clone_box(&self) -> Box<dyn SimulationPolicy<S>>;
}

/// Random simulation policy
///
/// Picks uniformly among the legal actions at every step until the game
/// ends, then reports the game's own outcome.
#[derive(Debug, Clone)]
pub struct RandomPolicy;

impl RandomPolicy {
    /// Creates a new random policy
    pub fn new() -> Self {
        RandomPolicy
    }

    /// Plays random moves from `state` until a terminal state is reached
    ///
    /// Returns the terminal state together with the actions taken. If a
    /// non-terminal state offers no actions the playout stops there.
    pub fn playout<S: GameState>(state: &S, rng: &mut dyn RngCore) -> (S, Vec<S::Action>) {
        let mut current_state = state.clone();
        let mut trace = Vec::new();

        while !current_state.is_terminal() {
            let legal_actions = current_state.get_legal_actions();
            let Some(action) = legal_actions.choose(&mut *rng) else {
                log::warn!("rollout reached a non-terminal state without legal actions");
                break;
            };
            current_state = current_state.apply_action(action);
            trace.push(action.clone());
        }

        (current_state, trace)
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState + 'static> SimulationPolicy<S> for RandomPolicy {
    fn simulate(&self, state: &S, for_player: &S::Player, rng: &mut dyn RngCore) -> f64 {
        let (terminal, _) = Self::playout(state, rng);
        if !terminal.is_terminal() {
            return 0.0;
        }
        terminal.get_returns(for_player)
    }

    fn clone_box(&self) -> Box<dyn SimulationPolicy<S>> {
        Box::new(self.clone())
    }
}

/// Heuristic simulation policy
///
/// Scores non-terminal positions with a caller-supplied function instead of
/// playing them out. Terminal positions always report the real outcome.
#[derive(Clone)]
pub struct HeuristicPolicy<F, S>
where
    F: Fn(&S, &<S as GameState>::Player) -> f64 + Clone + 'static,
    S: GameState + 'static,
{
    heuristic: F,
    _phantom: std::marker::PhantomData<S>,
}

impl<F, S> HeuristicPolicy<F, S>
where
    F: Fn(&S, &<S as GameState>::Player) -> f64 + Clone + 'static,
    S: GameState + 'static,
{
    /// Creates a new heuristic policy with the given function
    pub fn new(heuristic: F) -> Self {
        HeuristicPolicy {
            heuristic,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<F, S> std::fmt::Debug for HeuristicPolicy<F, S>
where
    F: Fn(&S, &<S as GameState>::Player) -> f64 + Clone + 'static,
    S: GameState + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeuristicPolicy").finish_non_exhaustive()
    }
}

impl<F, S> SimulationPolicy<S> for HeuristicPolicy<F, S>
where
    F: Fn(&S, &<S as GameState>::Player) -> f64 + Clone + 'static,
    S: GameState + 'static,
{
    fn simulate(&self, state: &S, for_player: &S::Player, _rng: &mut dyn RngCore) -> f64 {
        if state.is_terminal() {
            return state.get_returns(for_player);
        }

        (self.heuristic)(state, for_player)
    }

    fn clone_box(&self) -> Box<dyn SimulationPolicy<S>> {
        Box::new(self.clone())
    }
}

impl<S: GameState> SimulationPolicy<S> for Box<dyn SimulationPolicy<S>> {
    fn simulate(&self, state: &S, for_player: &S::Player, rng: &mut dyn RngCore) -> f64 {
        (**self).simulate(state, for_player, rng)
    }

    fn clone_box(&self) -> Box<dyn SimulationPolicy<S>> {
        (**self).clone_box()
    }
}
