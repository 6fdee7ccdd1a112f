//! Small games shared by the integration tests
#![allow(dead_code)]

use duel_mcts::{GameState, Player};

#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum Mark {
    X,
    O,
}

impl Player for Mark {}

/// Tic-tac-toe scored +1 / -1 / 0
#[derive(Clone, Debug)]
pub struct TicTacToe {
    pub board: [Option<Mark>; 9],
    pub current_player: Mark,
    pub moves_played: usize,
}

impl TicTacToe {
    pub fn new() -> Self {
        TicTacToe {
            board: [None; 9],
            current_player: Mark::X,
            moves_played: 0,
        }
    }

    /// Builds a position from a 9-character string of `X`, `O` and `.`
    pub fn from_rows(rows: &str, to_move: Mark) -> Self {
        let mut game = TicTacToe::new();
        for (i, c) in rows.chars().filter(|c| !c.is_whitespace()).enumerate() {
            game.board[i] = match c {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                _ => None,
            };
        }
        game.moves_played = game.board.iter().filter(|cell| cell.is_some()).count();
        game.current_player = to_move;
        game
    }

    pub fn get_winner(&self) -> Option<Mark> {
        const LINES: [[usize; 3]; 8] = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];

        LINES.iter().find_map(|&[a, b, c]| {
            if self.board[a].is_some() && self.board[a] == self.board[b] && self.board[a] == self.board[c]
            {
                self.board[a]
            } else {
                None
            }
        })
    }
}

impl GameState for TicTacToe {
    type Action = usize;
    type Player = Mark;

    fn get_legal_actions(&self) -> Vec<usize> {
        if self.get_winner().is_some() {
            return vec![];
        }
        (0..9).filter(|&i| self.board[i].is_none()).collect()
    }

    fn apply_action(&self, action: &usize) -> Self {
        let mut new_state = self.clone();
        new_state.board[*action] = Some(self.current_player);
        new_state.moves_played = self.moves_played + 1;
        new_state.current_player = match self.current_player {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        };
        new_state
    }

    fn is_terminal(&self) -> bool {
        self.get_winner().is_some() || self.moves_played == 9
    }

    fn get_returns(&self, for_player: &Mark) -> f64 {
        match self.get_winner() {
            Some(winner) if winner == *for_player => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        }
    }

    fn get_current_player(&self) -> Mark {
        self.current_player
    }
}

/// Player 0 picks one of `outcomes` and the game ends with that result
#[derive(Clone, Debug)]
pub struct OneShot {
    pub outcomes: Vec<f64>,
    pub chosen: Option<usize>,
}

impl OneShot {
    pub fn new(outcomes: Vec<f64>) -> Self {
        OneShot {
            outcomes,
            chosen: None,
        }
    }
}

impl GameState for OneShot {
    type Action = usize;
    type Player = usize;

    fn get_legal_actions(&self) -> Vec<usize> {
        match self.chosen {
            Some(_) => vec![],
            None => (0..self.outcomes.len()).collect(),
        }
    }

    fn apply_action(&self, action: &usize) -> Self {
        OneShot {
            outcomes: self.outcomes.clone(),
            chosen: Some(*action),
        }
    }

    fn is_terminal(&self) -> bool {
        self.chosen.is_some()
    }

    fn get_returns(&self, for_player: &usize) -> f64 {
        let result = self.chosen.map(|i| self.outcomes[i]).unwrap_or(0.0);
        if *for_player == 0 {
            result
        } else {
            -result
        }
    }

    fn get_current_player(&self) -> usize {
        if self.chosen.is_some() {
            1
        } else {
            0
        }
    }
}

/// Take one or two stones; whoever takes the last stone wins
#[derive(Clone, Debug)]
pub struct Nim {
    pub stones: u8,
    pub to_move: usize,
}

impl GameState for Nim {
    type Action = u8;
    type Player = usize;

    fn get_legal_actions(&self) -> Vec<u8> {
        (1..=self.stones.min(2)).collect()
    }

    fn apply_action(&self, take: &u8) -> Self {
        Nim {
            stones: self.stones - take,
            to_move: 1 - self.to_move,
        }
    }

    fn is_terminal(&self) -> bool {
        self.stones == 0
    }

    fn get_returns(&self, for_player: &usize) -> f64 {
        if *for_player == self.to_move {
            -1.0
        } else {
            1.0
        }
    }

    fn get_current_player(&self) -> usize {
        self.to_move
    }
}

/// Branching game of fixed length that always ends in a draw
#[derive(Clone, Debug)]
pub struct DrawTree {
    pub depth: usize,
    pub max_depth: usize,
    pub width: usize,
}

impl DrawTree {
    pub fn new(width: usize, max_depth: usize) -> Self {
        DrawTree {
            depth: 0,
            max_depth,
            width,
        }
    }
}

impl GameState for DrawTree {
    type Action = usize;
    type Player = usize;

    fn get_legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return vec![];
        }
        (0..self.width).collect()
    }

    fn apply_action(&self, _action: &usize) -> Self {
        DrawTree {
            depth: self.depth + 1,
            ..self.clone()
        }
    }

    fn is_terminal(&self) -> bool {
        self.depth >= self.max_depth
    }

    fn get_returns(&self, _for_player: &usize) -> f64 {
        0.0
    }

    fn get_current_player(&self) -> usize {
        self.depth % 2
    }
}

/// Claims the game is still running but offers no moves
#[derive(Clone, Debug)]
pub struct Stuck;

impl GameState for Stuck {
    type Action = usize;
    type Player = usize;

    fn get_legal_actions(&self) -> Vec<usize> {
        vec![]
    }

    fn apply_action(&self, _action: &usize) -> Self {
        Stuck
    }

    fn is_terminal(&self) -> bool {
        false
    }

    fn get_returns(&self, _for_player: &usize) -> f64 {
        0.0
    }

    fn get_current_player(&self) -> usize {
        0
    }
}
