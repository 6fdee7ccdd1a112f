//! Traits defining the game interface consumed by the search.
//!
//! The search never implements game rules itself. Anything that can enumerate
//! legal actions, apply them to produce a new position, detect the end of the
//! game and score it can be searched.

use std::fmt::Debug;

/// Trait for actions that can be taken in a game
///
/// Actions are cloned into the tree (one per child node) and compared when
/// callers look up statistics, so they should be cheap to copy.
pub trait Action: Clone + Debug + PartialEq {}

/// Trait for players in a game
pub trait Player: Clone + Debug + PartialEq {}

/// Trait defining the game state interface required for MCTS
///
/// Implementations describe a two-player, zero-sum, perfect-information game
/// where players alternate moves. The search relies on the zero-sum property
/// when it flips the sign of a result at every ply during backpropagation.
pub trait GameState: Clone {
    /// The type of actions that can be taken in this game
    type Action: Action;

    /// The type of players in this game
    type Player: Player;

    /// Returns the legal actions from this state
    ///
    /// The order must be deterministic: children are created in this order and
    /// every tie-break in the search favours the earliest entry.
    ///
    /// # Example
    ///
    /// ```
    /// # use duel_mcts::GameState;
    /// # #[derive(Clone)]
    /// # struct Nim { stones: u8, to_move: usize }
    /// # impl GameState for Nim {
    /// # type Action = u8;
    /// # type Player = usize;
    /// fn get_legal_actions(&self) -> Vec<u8> {
    ///     (1..=self.stones.min(3)).collect()
    /// }
    /// # fn apply_action(&self, take: &u8) -> Self {
    /// #     Nim { stones: self.stones - take, to_move: 1 - self.to_move }
    /// # }
    /// # fn is_terminal(&self) -> bool { self.stones == 0 }
    /// # fn get_returns(&self, p: &usize) -> f64 { if *p == self.to_move { -1.0 } else { 1.0 } }
    /// # fn get_current_player(&self) -> usize { self.to_move }
    /// # }
    /// ```
    fn get_legal_actions(&self) -> Vec<Self::Action>;

    /// Applies an action, returning the resulting state
    ///
    /// The receiver must be left untouched: the tree keeps every position it
    /// has seen and rollouts work on their own copies.
    fn apply_action(&self, action: &Self::Action) -> Self;

    /// Returns true if the game is over
    fn is_terminal(&self) -> bool;

    /// Returns the outcome of a finished game for the given player
    ///
    /// Only called on terminal states. Outcomes must be zero-sum across the two
    /// players, typically `1.0` for a win, `-1.0` for a loss and `0.0` for a
    /// draw.
    fn get_returns(&self, for_player: &Self::Player) -> f64;

    /// Returns the player about to move
    ///
    /// Only called on non-terminal states.
    fn get_current_player(&self) -> Self::Player;
}

impl Action for usize {}
impl Action for u8 {}
impl Action for u16 {}
impl Action for u32 {}
impl Action for i32 {}

impl Player for usize {}
impl Player for u8 {}
impl Player for i32 {}
impl Player for char {}
