//! Main implementation of the Monte Carlo Tree Search algorithm
//!
//! This module contains the search driver, orchestrating the four phases of
//! selection, expansion, simulation, and backpropagation, and picking the
//! final recommendation.

use std::fmt::Write as _;
use std::time::Instant;

use log::{debug, trace, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    config::MCTSConfig,
    game_state::GameState,
    policy::{
        selection::{SelectionPolicy, UCB1Policy},
        simulation::{RandomPolicy, SimulationPolicy},
    },
    stats::SearchStatistics,
    tree::{NodeId, SearchTree},
    MCTSError, Result,
};

/// Searches `initial_state` with the default configuration and
/// `num_simulations` simulations, returning the recommended action
///
/// # Errors
///
/// [`MCTSError::InvalidState`] if `initial_state` is terminal.
///
/// # Example
///
/// ```
/// use duel_mcts::{run_simulation, GameState};
///
/// // Take one or two stones; whoever takes the last stone wins.
/// #[derive(Clone)]
/// struct Nim { stones: u8, to_move: usize }
///
/// impl GameState for Nim {
///     type Action = u8;
///     type Player = usize;
///
///     fn get_legal_actions(&self) -> Vec<u8> { (1..=self.stones.min(2)).collect() }
///     fn apply_action(&self, take: &u8) -> Self {
///         Nim { stones: self.stones - take, to_move: 1 - self.to_move }
///     }
///     fn is_terminal(&self) -> bool { self.stones == 0 }
///     fn get_returns(&self, player: &usize) -> f64 {
///         if *player == self.to_move { -1.0 } else { 1.0 }
///     }
///     fn get_current_player(&self) -> usize { self.to_move }
/// }
///
/// let action = run_simulation(Nim { stones: 2, to_move: 0 }, 200).unwrap();
/// assert_eq!(action, 2);
/// ```
pub fn run_simulation<S: GameState + 'static>(
    initial_state: S,
    num_simulations: usize,
) -> Result<S::Action> {
    let config = MCTSConfig::default().with_num_simulations(num_simulations);
    MCTS::new(initial_state, config).search()
}

/// The main Monte Carlo Tree Search implementation
///
/// Every call to [`search`](MCTS::search) builds a fresh tree from the initial
/// state. The tree of the latest search is kept so it can be inspected.
pub struct MCTS<S: GameState> {
    /// Position to search from
    initial_state: S,

    /// Tree built by the latest search
    tree: Option<SearchTree<S>>,

    /// Configuration for the search
    config: MCTSConfig,

    /// Statistics gathered during the latest search
    statistics: SearchStatistics,

    /// Policy for picking children during the selection phase
    selection_policy: Box<dyn SelectionPolicy<S>>,

    /// Policy for evaluating nodes during the simulation phase
    simulation_policy: Box<dyn SimulationPolicy<S>>,

    /// Random source for rollouts
    rng: StdRng,
}

impl<S: GameState + 'static> MCTS<S> {
    /// Creates a new MCTS instance with the given initial state and configuration
    pub fn new(initial_state: S, config: MCTSConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        MCTS {
            initial_state,
            tree: None,
            selection_policy: Box::new(UCB1Policy::new(config.exploration_constant)),
            simulation_policy: Box::new(RandomPolicy::new()),
            config,
            statistics: SearchStatistics::new(),
            rng,
        }
    }

    /// Sets the selection policy to use
    pub fn with_selection_policy<P: SelectionPolicy<S> + 'static>(mut self, policy: P) -> Self {
        self.selection_policy = Box::new(policy);
        self
    }

    /// Sets the simulation policy to use
    pub fn with_simulation_policy<P: SimulationPolicy<S> + 'static>(mut self, policy: P) -> Self {
        self.simulation_policy = Box::new(policy);
        self
    }

    /// Runs the search and returns the action of the most visited root child
    ///
    /// # Errors
    ///
    /// * [`MCTSError::InvalidConfiguration`] if the configuration is rejected.
    /// * [`MCTSError::InvalidState`] if the initial state is terminal, or if the
    ///   game offers no legal actions in a non-terminal state.
    ///
    /// Both configuration and initial state are checked before any node is
    /// created.
    pub fn search(&mut self) -> Result<S::Action> {
        self.config.validate()?;
        if self.initial_state.is_terminal() {
            return Err(MCTSError::InvalidState(
                "cannot search from a terminal state".to_string(),
            ));
        }

        self.statistics = SearchStatistics::new();
        let start_time = Instant::now();

        let mut tree = SearchTree::new(self.initial_state.clone());
        let root_children = tree.expand(tree.root())?;
        debug!(
            "starting search: {} root actions, {} simulations",
            root_children, self.config.num_simulations
        );

        for i in 0..self.config.num_simulations {
            if let Some(max_duration) = self.config.max_time {
                if start_time.elapsed() >= max_duration {
                    self.statistics.stopped_early = true;
                    warn!(
                        "search stopped after {} of {} simulations: time limit reached",
                        i, self.config.num_simulations
                    );
                    break;
                }
            }

            self.execute_iteration(&mut tree, i)?;
            self.statistics.iterations = i + 1;
        }

        self.statistics.total_time = start_time.elapsed();
        self.statistics.tree_size = tree.len();
        self.statistics.max_depth = tree.max_depth();

        let best_action = Self::select_best_action(&tree);
        debug!(
            "root child visits: {:?}",
            tree.children(tree.root())
                .iter()
                .map(|&child| tree.get(child).visits)
                .collect::<Vec<_>>()
        );
        debug!("{}", self.statistics.summary());

        self.tree = Some(tree);
        best_action
    }

    /// Runs one simulation: select, expand, simulate, backpropagate
    fn execute_iteration(&mut self, tree: &mut SearchTree<S>, iteration: usize) -> Result<()> {
        // 1. Selection
        let frontier = self.selection(tree);

        // 2. Expansion
        let node = tree.get(frontier);
        let leaf = if !node.state.is_terminal() && node.is_leaf() {
            tree.expand(frontier)?;
            self.selection_policy
                .select_child(tree, frontier)
                .ok_or_else(|| {
                    MCTSError::ContractViolation(format!(
                        "expanded node {} has no child to select",
                        frontier
                    ))
                })?
        } else {
            frontier
        };

        // 3. Simulation, scored for the player who chose `leaf`
        let parent = tree.get(leaf).parent.ok_or_else(|| {
            MCTSError::ContractViolation("simulation reached the root".to_string())
        })?;
        let perspective = tree.get(parent).state.get_current_player();
        let value =
            self.simulation_policy
                .simulate(&tree.get(leaf).state, &perspective, &mut self.rng);

        trace!(
            "simulation {}: node {} at depth {} valued {:.3} for {:?}",
            iteration,
            leaf,
            tree.get(leaf).depth,
            value,
            perspective
        );

        // 4. Backpropagation
        tree.backpropagate(leaf, value);

        Ok(())
    }

    /// Selection phase: descend from the root to an unexpanded or terminal node
    fn selection(&self, tree: &SearchTree<S>) -> NodeId {
        let mut current = tree.root();

        loop {
            let node = tree.get(current);
            if node.state.is_terminal() || node.is_leaf() {
                return current;
            }

            match self.selection_policy.select_child(tree, current) {
                Some(child) => current = child,
                None => return current,
            }
        }
    }

    /// Picks the root child with the most visits; the first one wins ties
    fn select_best_action(tree: &SearchTree<S>) -> Result<S::Action> {
        let mut best_visits = 0;
        let mut best_child = None;

        for &child in tree.children(tree.root()) {
            let visits = tree.get(child).visits;
            if best_child.is_none() || visits > best_visits {
                best_visits = visits;
                best_child = Some(child);
            }
        }

        let best_child = best_child.ok_or_else(|| {
            MCTSError::InvalidState("root has no legal actions".to_string())
        })?;

        tree.get(best_child).action.clone().ok_or_else(|| {
            MCTSError::ContractViolation(format!("root child {} has no action", best_child))
        })
    }

    /// Returns the search statistics
    pub fn get_statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns the configuration
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }

    /// Returns the tree built by the latest search
    pub fn tree(&self) -> Option<&SearchTree<S>> {
        self.tree.as_ref()
    }

    /// Returns `(action, visits, mean value)` for every root child of the
    /// latest search, in legal-action order
    ///
    /// Mean values are from the perspective of the player to move at the root.
    pub fn child_statistics(&self) -> Vec<(S::Action, u64, f64)> {
        let Some(tree) = &self.tree else {
            return Vec::new();
        };

        tree.children(tree.root())
            .iter()
            .filter_map(|&child| {
                let node = tree.get(child);
                let action = node.action.clone()?;
                Some((action, node.visits, node.value()))
            })
            .collect()
    }

    /// Returns a visualization of the latest search tree
    ///
    /// Nodes deeper than `max_depth` are omitted.
    pub fn visualize_tree(&self, max_depth: usize) -> String {
        let mut output = String::new();
        let Some(tree) = &self.tree else {
            return output;
        };

        let mut stack = vec![tree.root()];
        while let Some(id) = stack.pop() {
            let node = tree.get(id);
            let action_str = match &node.action {
                Some(action) => format!("{:?}", action),
                None => "Root".to_string(),
            };

            let _ = writeln!(
                output,
                "{}{} (visits: {}, value: {:.3})",
                "  ".repeat(node.depth),
                action_str,
                node.visits,
                node.value()
            );

            if node.depth < max_depth {
                stack.extend(node.children.iter().rev());
            }
        }

        output
    }
}
