//! Connect Four game model: the board as an immutable value, the two sides,
//! legal-move generation and end-of-game scoring.

mod board;
mod moves;
mod side;
mod state;

pub use board::{Board, Cell, CENTER_COL, COLS, ROWS, WINDOW};
pub use moves::{valid_moves, LegalMoves};
pub use side::Side;
pub use state::{count_fours, FourCounts, GameOutcome, GameState};
