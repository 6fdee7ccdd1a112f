//! Policies for different phases of the MCTS algorithm
//!
//! - Selection policies: how to choose which child to descend into
//! - Simulation policies: how to evaluate a newly reached node

pub mod selection;
pub mod simulation;

pub use selection::{SelectionPolicy, UCB1Policy};
pub use simulation::{HeuristicPolicy, RandomPolicy, SimulationPolicy};
