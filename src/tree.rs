//! Tree data structures for Monte Carlo Tree Search
//!
//! Nodes live in an arena owned by [`SearchTree`] and refer to each other through
//! [`NodeId`] handles. Children are owned by the arena, and each node keeps a
//! plain handle back to its parent, so walking towards the root is O(1) per step
//! and the tree can never form an ownership cycle.

use std::fmt;

use crate::{game_state::GameState, MCTSError, Result};

/// Handle to a node stored in a [`SearchTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the position of the node in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Represents a node in the MCTS tree
///
/// A node pairs a game position with the statistics the search gathered for
/// it. `value_sum` is expressed from the perspective of the player who moves
/// at the parent, i.e. the player who chose to come here.
#[derive(Debug, Clone)]
pub struct MCTSNode<S: GameState> {
    /// The game state at this node
    pub state: S,

    /// The action that led to this state (None for root)
    pub action: Option<S::Action>,

    /// Parent handle (None for root)
    pub parent: Option<NodeId>,

    /// Children in legal-action order; empty until expanded
    pub children: Vec<NodeId>,

    /// Number of simulations that passed through this node
    pub visits: u64,

    /// Sum of simulation outcomes credited to this node
    pub value_sum: f64,

    /// Depth of this node in the tree (root = 0)
    pub depth: usize,
}

impl<S: GameState> MCTSNode<S> {
    fn new(state: S, action: Option<S::Action>, parent: Option<NodeId>, depth: usize) -> Self {
        MCTSNode {
            state,
            action,
            parent,
            children: Vec::new(),
            visits: 0,
            value_sum: 0.0,
            depth,
        }
    }

    /// Returns the mean outcome of this node, or 0 when unvisited
    pub fn value(&self) -> f64 {
        if self.visits == 0 {
            return 0.0;
        }
        self.value_sum / self.visits as f64
    }

    /// Returns true if this node has not been expanded
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns true if this node is the root of its tree
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Arena-backed search tree
///
/// The root is always `NodeId(0)`; the arena is never empty.
#[derive(Debug, Clone)]
pub struct SearchTree<S: GameState> {
    nodes: Vec<MCTSNode<S>>,
}

impl<S: GameState> SearchTree<S> {
    /// Creates a tree holding only a root for the given state
    pub fn new(root_state: S) -> Self {
        SearchTree {
            nodes: vec![MCTSNode::new(root_state, None, None, 0)],
        }
    }

    /// Returns the root handle
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns a node by handle
    #[inline]
    pub fn get(&self, id: NodeId) -> &MCTSNode<S> {
        &self.nodes[id.0]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut MCTSNode<S> {
        &mut self.nodes[id.0]
    }

    /// Total number of nodes in the tree
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree is created with its root
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth of the deepest node
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|node| node.depth).max().unwrap_or(0)
    }

    /// Children of a node in expansion order
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.get(id).children
    }

    /// Creates one child per legal action of the node's state
    ///
    /// Each child holds its own copy of the state with the action applied, and
    /// children keep the order returned by
    /// [`GameState::get_legal_actions`]. Returns the number of children added.
    ///
    /// # Errors
    ///
    /// * [`MCTSError::ContractViolation`] if the node already has children or
    ///   its state is terminal. The tree is left unchanged.
    /// * [`MCTSError::InvalidState`] if a non-terminal state offers no legal
    ///   actions.
    pub fn expand(&mut self, id: NodeId) -> Result<usize> {
        let node = self.get(id);
        if !node.children.is_empty() {
            return Err(MCTSError::ContractViolation(format!(
                "node {} is already expanded",
                id
            )));
        }
        if node.state.is_terminal() {
            return Err(MCTSError::ContractViolation(format!(
                "node {} holds a terminal state and cannot be expanded",
                id
            )));
        }

        let actions = node.state.get_legal_actions();
        if actions.is_empty() {
            return Err(MCTSError::InvalidState(format!(
                "non-terminal state at node {} has no legal actions",
                id
            )));
        }

        let depth = node.depth + 1;
        let children: Vec<MCTSNode<S>> = actions
            .into_iter()
            .map(|action| {
                let state = node.state.apply_action(&action);
                MCTSNode::new(state, Some(action), Some(id), depth)
            })
            .collect();

        let first = self.nodes.len();
        let added = children.len();
        self.nodes.extend(children);
        self.get_mut(id).children = (first..first + added).map(NodeId).collect();

        Ok(added)
    }

    /// Credits a simulation outcome to `leaf` and all of its ancestors
    ///
    /// `value` is the outcome for the player who moves at `leaf`'s parent. Every
    /// node on the path gains one visit. Every node except the root gains the
    /// value, negated once per ply moving upwards.
    pub fn backpropagate(&mut self, leaf: NodeId, value: f64) {
        let mut current = Some(leaf);
        let mut current_value = value;

        while let Some(id) = current {
            let node = self.get_mut(id);
            node.visits += 1;
            if node.parent.is_some() {
                node.value_sum += current_value;
            }

            current_value = -current_value;
            current = node.parent;
        }
    }

    /// Iterates from `id` up to and including the root
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, S> {
        Ancestors {
            tree: self,
            next: Some(id),
        }
    }
}

/// Iterator over a node and its ancestors, see [`SearchTree::ancestors`]
pub struct Ancestors<'a, S: GameState> {
    tree: &'a SearchTree<S>,
    next: Option<NodeId>,
}

impl<S: GameState> Iterator for Ancestors<'_, S> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.tree.get(id).parent;
        Some(id)
    }
}
