//! Stochastic search for the drifting-move variant.
//!
//! Only side A's drops drift: at an A decision node every candidate column
//! is scored as the probability-weighted sum over its [`chance_outcomes`].
//! Side B's nodes are plain minimax.
//!
//! The pruned variant keeps alpha-beta bounds on decision nodes only. A
//! chance node always resolves its outcomes with an unbounded window, so the
//! expectation compared against a bound is exact and the pruned search
//! returns the same score and move as the unpruned one.
//!
//! Node counts include every node below the root decision node but not the
//! root itself. A root that is already a leaf reports one node.

use super::chance::chance_outcomes;
use super::heuristic::{Heuristic, WindowHeuristic};
use super::search_result::SearchResult;
use crate::game::{valid_moves, Board, Side};

/// Expectiminimax from `board` with `side` to move.
pub fn expected_search(board: &Board, depth: u32, side: Side) -> SearchResult {
    ExpectedSearch::new(&WindowHeuristic, false).root(board, depth, side)
}

/// Expectiminimax with alpha-beta cutoffs between decision-node candidates.
pub fn expected_search_pruned(board: &Board, depth: u32, side: Side) -> SearchResult {
    ExpectedSearch::new(&WindowHeuristic, true).root(board, depth, side)
}

/// Expectiminimax driver over an arbitrary heuristic.
pub struct ExpectedSearch<'h, H: Heuristic + ?Sized> {
    heuristic: &'h H,
    use_pruning: bool,
}

impl<'h, H: Heuristic + ?Sized> ExpectedSearch<'h, H> {
    pub fn new(heuristic: &'h H, use_pruning: bool) -> Self {
        ExpectedSearch {
            heuristic,
            use_pruning,
        }
    }

    pub fn root(&self, board: &Board, depth: u32, side: Side) -> SearchResult {
        let result = self.node(board, depth, side, f64::NEG_INFINITY, f64::INFINITY);
        if result.best_move.is_some() {
            // Decision root: report only what was explored beneath it.
            SearchResult {
                nodes: result.nodes - 1,
                ..result
            }
        } else {
            result
        }
    }

    fn node(&self, board: &Board, depth: u32, side: Side, alpha: f64, beta: f64) -> SearchResult {
        debug_assert!(board.is_settled(), "board violates gravity:\n{board}");

        if depth == 0 || valid_moves(board).is_empty() {
            return SearchResult::leaf(self.heuristic.evaluate(board));
        }

        match side {
            Side::A => self.max_node(board, depth, alpha, beta),
            Side::B => self.min_node(board, depth, alpha, beta),
        }
    }

    fn max_node(&self, board: &Board, depth: u32, mut alpha: f64, beta: f64) -> SearchResult {
        let mut nodes = 1;
        let mut best = f64::NEG_INFINITY;
        let mut best_move = None;

        for col in &valid_moves(board) {
            let mut expected = 0.0;
            for outcome in &chance_outcomes(board, col) {
                let child = board.drop_piece(outcome.col, Side::A);
                let result = self.node(
                    &child,
                    depth - 1,
                    Side::B,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                );
                nodes += result.nodes;
                expected += outcome.probability * result.score;
            }

            if expected > best {
                best = expected;
                best_move = Some(col);
            }
            if self.use_pruning {
                alpha = alpha.max(best);
                if alpha >= beta {
                    break;
                }
            }
        }

        SearchResult {
            score: best,
            best_move,
            nodes,
        }
    }

    fn min_node(&self, board: &Board, depth: u32, alpha: f64, mut beta: f64) -> SearchResult {
        let mut nodes = 1;
        let mut best = f64::INFINITY;
        let mut best_move = None;

        for col in &valid_moves(board) {
            let child = board.drop_piece(col, Side::B);
            let result = self.node(&child, depth - 1, Side::A, alpha, beta);
            nodes += result.nodes;

            if result.score < best {
                best = result.score;
                best_move = Some(col);
            }
            if self.use_pruning {
                beta = beta.min(best);
                if alpha >= beta {
                    break;
                }
            }
        }

        SearchResult {
            score: best,
            best_move,
            nodes,
        }
    }
}
