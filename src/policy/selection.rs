//! Selection policies for the MCTS algorithm
//!
//! Selection policies determine which child to descend into during the
//! selection phase of MCTS, balancing exploration and exploitation.

use crate::{
    game_state::GameState,
    tree::{NodeId, SearchTree},
};

/// Trait for policies that select nodes to explore
pub trait SelectionPolicy<S: GameState> {
    /// Selects the child of `node` to descend into
    ///
    /// Returns `None` only when `node` has no children.
    fn select_child(&self, tree: &SearchTree<S>, node: NodeId) -> Option<NodeId>;

    /// Create a boxed clone of this policy
    fn clone_box(&self) -> Box<dyn SelectionPolicy<S>>;
}

/// Upper Confidence Bound 1 (UCB1) selection policy
///
/// Scores each child with
///
/// ```text
/// UCB1 = value_sum / visits + exploration_constant * sqrt(ln(parent_visits) / visits)
/// ```
///
/// Unvisited children score positive infinity, so every child of a node is
/// tried once before any of them is tried twice. Among equal scores the first
/// child in expansion order wins.
#[derive(Debug, Clone)]
pub struct UCB1Policy {
    /// Exploration constant. Higher values favour less-visited children.
    pub exploration_constant: f64,
}

impl UCB1Policy {
    /// Creates a new UCB1 policy with the given exploration constant
    pub fn new(exploration_constant: f64) -> Self {
        UCB1Policy {
            exploration_constant,
        }
    }

    /// Calculates the UCB1 score of a child
    ///
    /// # Panics
    ///
    /// If the child has been visited but the parent has not. Visits flow from
    /// the root down, so this only happens when the tree statistics are corrupt.
    pub fn ucb1_value(&self, value_sum: f64, child_visits: u64, parent_visits: u64) -> f64 {
        if child_visits == 0 {
            return f64::INFINITY;
        }
        assert!(
            parent_visits > 0,
            "UCB1 evaluated for a visited child of an unvisited parent"
        );

        let exploitation = value_sum / child_visits as f64;
        let exploration =
            self.exploration_constant * ((parent_visits as f64).ln() / child_visits as f64).sqrt();

        exploitation + exploration
    }
}

impl Default for UCB1Policy {
    fn default() -> Self {
        Self::new(1.41)
    }
}

impl<S: GameState + 'static> SelectionPolicy<S> for UCB1Policy {
    fn select_child(&self, tree: &SearchTree<S>, node: NodeId) -> Option<NodeId> {
        let parent_visits = tree.get(node).visits;
        let mut best_value = f64::NEG_INFINITY;
        let mut best_child = None;

        for &child_id in tree.children(node) {
            let child = tree.get(child_id);
            let ucb_value = self.ucb1_value(child.value_sum, child.visits, parent_visits);

            if best_child.is_none() || ucb_value > best_value {
                best_value = ucb_value;
                best_child = Some(child_id);
            }
        }

        best_child
    }

    fn clone_box(&self) -> Box<dyn SelectionPolicy<S>> {
        Box::new(self.clone())
    }
}

impl<S: GameState> SelectionPolicy<S> for Box<dyn SelectionPolicy<S>> {
    fn select_child(&self, tree: &SearchTree<S>, node: NodeId) -> Option<NodeId> {
        (**self).select_child(tree, node)
    }

    fn clone_box(&self) -> Box<dyn SelectionPolicy<S>> {
        (**self).clone_box()
    }
}
