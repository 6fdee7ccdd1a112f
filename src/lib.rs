//! # duel-mcts
//!
//! Monte Carlo Tree Search for two-player, zero-sum, perfect-information games
//! where players alternate moves.
//!
//! Given a position, the search grows a partial game tree, evaluates new nodes
//! with random playouts and recommends the move that was explored the most.
//!
//! ## Basic Usage
//!
//! ```
//! use duel_mcts::{GameState, MCTSConfig, MCTS};
//!
//! // Players take one or two stones in turn; taking the last stone wins.
//! #[derive(Clone, Debug)]
//! struct Nim {
//!     stones: u8,
//!     to_move: usize,
//! }
//!
//! impl GameState for Nim {
//!     type Action = u8;
//!     type Player = usize;
//!
//!     fn get_legal_actions(&self) -> Vec<u8> {
//!         (1..=self.stones.min(2)).collect()
//!     }
//!
//!     fn apply_action(&self, take: &u8) -> Self {
//!         Nim {
//!             stones: self.stones - take,
//!             to_move: 1 - self.to_move,
//!         }
//!     }
//!
//!     fn is_terminal(&self) -> bool {
//!         self.stones == 0
//!     }
//!
//!     fn get_returns(&self, player: &usize) -> f64 {
//!         // The player left without a move lost.
//!         if *player == self.to_move { -1.0 } else { 1.0 }
//!     }
//!
//!     fn get_current_player(&self) -> usize {
//!         self.to_move
//!     }
//! }
//!
//! fn main() -> Result<(), duel_mcts::MCTSError> {
//!     let config = MCTSConfig::default()
//!         .with_num_simulations(2_000)
//!         .with_seed(42);
//!
//!     // From four stones the winning move leaves a multiple of three.
//!     let mut mcts = MCTS::new(Nim { stones: 4, to_move: 0 }, config);
//!     let best_action = mcts.search()?;
//!
//!     println!("{}", mcts.get_statistics().summary());
//!     assert_eq!(best_action, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## How It Works
//!
//! Every simulation runs four phases:
//!
//! 1. **Selection**: starting at the root, descend to the child with the best
//!    UCB1 score until reaching a node that is unexpanded or terminal.
//! 2. **Expansion**: give an unexpanded, non-terminal node one child per legal
//!    action and step into the first of them.
//! 3. **Simulation**: play random moves from that node to the end of the game.
//! 4. **Backpropagation**: walk back to the root adding one visit to every node
//!    and crediting the outcome, with its sign flipped at every ply.
//!
//! After the simulation budget is spent the root child with the most visits is
//! returned.
//!
//! ## Randomness
//!
//! Rollouts draw from a [`rand::rngs::StdRng`] owned by the searcher. Set
//! [`MCTSConfig::seed`] to make searches reproducible.

pub mod config;
pub mod game_state;
pub mod mcts;
pub mod policy;
pub mod stats;
pub mod tree;

pub use config::MCTSConfig;
pub use game_state::{Action, GameState, Player};
pub use mcts::{run_simulation, MCTS};
pub use policy::{SelectionPolicy, SimulationPolicy};
pub use stats::SearchStatistics;
pub use tree::{MCTSNode, NodeId, SearchTree};

/// Error types for the MCTS algorithm
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MCTSError {
    /// The game position cannot be searched
    ///
    /// Returned for a terminal initial state, or when a non-terminal state
    /// offers no legal actions.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// An internal invariant of the search tree was broken
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for MCTS operations
pub type Result<T> = std::result::Result<T, MCTSError>;
