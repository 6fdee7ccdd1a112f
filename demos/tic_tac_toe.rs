//! Tic-Tac-Toe against the search
//!
//! Run with `cargo run --example tic_tac_toe`. Pass `--self-play` to watch
//! the search play both sides. Set `RUST_LOG=debug` to see search logs.

use std::fmt;
use std::io::{self, Write};

use duel_mcts::{GameState, MCTSConfig, MCTS};

fn main() -> io::Result<()> {
    env_logger::init();

    let self_play = std::env::args().any(|arg| arg == "--self-play");

    println!("MCTS Tic-Tac-Toe");
    println!("================");
    println!();

    let mut game = TicTacToe::new();
    let config = MCTSConfig::default().with_num_simulations(10_000);

    while !game.is_terminal() {
        println!("{}", game);

        if game.current_player == Player::X && !self_play {
            print!("Your move (enter row column, e.g. '1 2'): ");
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                return Ok(());
            }

            let coords: Vec<usize> = input
                .split_whitespace()
                .filter_map(|s| s.parse::<usize>().ok())
                .collect();

            if coords.len() != 2 || coords[0] > 2 || coords[1] > 2 {
                println!("Invalid move! Enter row and column (0-2).");
                continue;
            }

            let action = Move {
                index: coords[0] * 3 + coords[1],
            };
            if !game.is_legal_move(&action) {
                println!("Illegal move! Try again.");
                continue;
            }

            game = game.apply_action(&action);
        } else {
            println!("AI is thinking...");

            // A fresh tree for every move
            let mut mcts = MCTS::new(game.clone(), config.clone());

            match mcts.search() {
                Ok(action) => {
                    println!(
                        "AI chooses: {} (row {}, col {})",
                        action.index,
                        action.index / 3,
                        action.index % 3
                    );
                    for (candidate, visits, value) in mcts.child_statistics() {
                        println!(
                            "  {} -> visits {:>5}, value {:+.3}",
                            candidate.index, visits, value
                        );
                    }
                    println!("{}", mcts.get_statistics().summary());

                    game = game.apply_action(&action);
                }
                Err(e) => {
                    println!("Error: {}", e);
                    break;
                }
            }
        }
    }

    println!("{}", game);

    match game.get_winner() {
        Some(winner) => println!("Player {:?} wins!", winner),
        None => println!("The game is a draw!"),
    }

    Ok(())
}

/// Players in Tic-Tac-Toe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Player {
    X,
    O,
}

impl duel_mcts::Player for Player {}

/// Tic-Tac-Toe move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Move {
    /// Board position index (0-8)
    index: usize,
}

impl duel_mcts::Action for Move {}

/// Tic-Tac-Toe game state
#[derive(Clone)]
struct TicTacToe {
    board: [Option<Player>; 9],
    current_player: Player,
    moves_played: usize,
}

impl TicTacToe {
    fn new() -> Self {
        TicTacToe {
            board: [None; 9],
            current_player: Player::X,
            moves_played: 0,
        }
    }

    fn is_legal_move(&self, action: &Move) -> bool {
        action.index < 9 && self.board[action.index].is_none()
    }

    fn get_winner(&self) -> Option<Player> {
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
            match (self.board[a], self.board[b], self.board[c]) {
                (Some(x), Some(y), Some(z)) if x == y && y == z => Some(x),
                _ => None,
            }
        })
    }
}

impl GameState for TicTacToe {
    type Action = Move;
    type Player = Player;

    fn get_legal_actions(&self) -> Vec<Move> {
        if self.get_winner().is_some() {
            return vec![];
        }
        (0..9)
            .filter(|&index| self.board[index].is_none())
            .map(|index| Move { index })
            .collect()
    }

    fn apply_action(&self, action: &Move) -> Self {
        let mut new_state = self.clone();
        new_state.board[action.index] = Some(self.current_player);
        new_state.moves_played = self.moves_played + 1;
        new_state.current_player = match self.current_player {
            Player::X => Player::O,
            Player::O => Player::X,
        };
        new_state
    }

    fn is_terminal(&self) -> bool {
        self.get_winner().is_some() || self.moves_played == 9
    }

    fn get_returns(&self, for_player: &Player) -> f64 {
        match self.get_winner() {
            Some(winner) if winner == *for_player => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        }
    }

    fn get_current_player(&self) -> Player {
        self.current_player
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2")?;
        for row in 0..3 {
            write!(f, "{} ", row)?;
            for col in 0..3 {
                let symbol = match self.board[row * 3 + col] {
                    Some(Player::X) => "X",
                    Some(Player::O) => "O",
                    None => ".",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "\nPlayer {:?}'s turn", self.current_player)
    }
}
