use crate::game::{Board, Cell, Side, CENTER_COL, ROWS, WINDOW};

/// Bonus per side-A piece in the centre column.
pub const CENTER_WEIGHT: f64 = 3.0;

/// Value of an unblocked window indexed by how many pieces one side has in it.
/// Four of a kind sits in the 100000 band, which is how a won line shows up
/// to the search.
pub const WINDOW_WEIGHTS: [f64; WINDOW + 1] = [0.0, 1.0, 10.0, 100.0, 100_000.0];

/// Trait for evaluating a board position.
///
/// Scores are always from side A's point of view: positive favours A,
/// negative favours B.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, board: &Board) -> f64;
}

/// Default heuristic: centre control for side A plus every 4-cell window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_window(window: &[Cell; WINDOW]) -> f64 {
        let a = window.iter().filter(|&&c| c == Cell::A).count();
        let b = window.iter().filter(|&&c| c == Cell::B).count();
        match (a, b) {
            (0, 0) => 0.0,
            (a, 0) => WINDOW_WEIGHTS[a],
            (0, b) => -WINDOW_WEIGHTS[b],
            // blocked: neither side can complete it
            _ => 0.0,
        }
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board) -> f64 {
        // Only side A earns the centre bonus.
        let center = (0..ROWS)
            .filter(|&row| board.get(row, CENTER_COL) == Side::A.to_cell())
            .count();
        let windows: f64 = board.windows().map(|w| Self::score_window(&w)).sum();
        center as f64 * CENTER_WEIGHT + windows
    }
}

/// Evaluate `board` with the default [`WindowHeuristic`].
pub fn evaluate(board: &Board) -> f64 {
    WindowHeuristic.evaluate(board)
}
