use serde::Serialize;

use super::board::Board;
use super::moves::{valid_moves, LegalMoves};
use super::side::Side;
use crate::error::MoveError;

/// How a finished game ended.
///
/// A game only ends when the board is full. The winner is whoever completed
/// more four-in-a-rows over the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Winner(Side),
    /// Both sides completed the same non-zero number of fours.
    Tie,
    /// Nobody completed a four.
    Draw,
}

/// Completed four-in-a-rows per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FourCounts {
    pub a: usize,
    pub b: usize,
}

impl FourCounts {
    pub fn of(board: &Board) -> Self {
        FourCounts {
            a: count_fours(board, Side::A),
            b: count_fours(board, Side::B),
        }
    }

    pub fn outcome(&self) -> GameOutcome {
        if self.a > self.b {
            GameOutcome::Winner(Side::A)
        } else if self.b > self.a {
            GameOutcome::Winner(Side::B)
        } else if self.a > 0 {
            GameOutcome::Tie
        } else {
            GameOutcome::Draw
        }
    }
}

/// Number of windows entirely occupied by `side`.
pub fn count_fours(board: &Board, side: Side) -> usize {
    let cell = side.to_cell();
    board
        .windows()
        .filter(|window| window.iter().all(|&c| c == cell))
        .count()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_side: Side,
    moves_played: usize,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state with `first` to move
    pub fn initial(first: Side) -> Self {
        GameState {
            board: Board::empty(),
            current_side: first,
            moves_played: 0,
            outcome: None,
        }
    }

    /// Resume from an arbitrary position
    pub fn from_board(board: Board, to_move: Side) -> Self {
        let moves_played = board.count(Side::A) + board.count(Side::B);
        GameState {
            board,
            current_side: to_move,
            moves_played,
            outcome: board.is_full().then(|| FourCounts::of(&board).outcome()),
        }
    }

    /// Get current side
    pub fn current_side(&self) -> Side {
        self.current_side
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> LegalMoves {
        valid_moves(&self.board)
    }

    /// Apply a move for the side to move and return the new state
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let (board, _) = self.board.try_drop(column, self.current_side)?;
        let outcome = board.is_full().then(|| FourCounts::of(&board).outcome());

        Ok(GameState {
            board,
            current_side: self.current_side.other(),
            moves_played: self.moves_played + 1,
            outcome,
        })
    }

    pub fn four_counts(&self) -> FourCounts {
        FourCounts::of(&self.board)
    }
}
