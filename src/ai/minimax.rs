//! Deterministic search: plain minimax, optionally with alpha-beta pruning.
//!
//! Side A maximizes and side B minimizes. There is no terminal check beyond
//! running out of depth or legal moves; a won position is recognised only by
//! its heuristic score. Pruning never changes the reported score or move,
//! only the number of nodes visited.

use super::heuristic::{Heuristic, WindowHeuristic};
use super::search_result::SearchResult;
use crate::game::{valid_moves, Board, Side};

/// Minimax from `board` with `side` to move, evaluated by [`WindowHeuristic`].
///
/// Pass `f64::NEG_INFINITY` / `f64::INFINITY` as `alpha` / `beta` at the root.
pub fn search(
    board: &Board,
    depth: u32,
    side: Side,
    alpha: f64,
    beta: f64,
    use_pruning: bool,
) -> SearchResult {
    search_with(&WindowHeuristic, board, depth, side, alpha, beta, use_pruning)
}

/// [`search`] with a caller-supplied heuristic.
pub fn search_with<H: Heuristic + ?Sized>(
    heuristic: &H,
    board: &Board,
    depth: u32,
    side: Side,
    mut alpha: f64,
    mut beta: f64,
    use_pruning: bool,
) -> SearchResult {
    debug_assert!(board.is_settled(), "board violates gravity:\n{board}");

    let moves = valid_moves(board);
    if depth == 0 || moves.is_empty() {
        return SearchResult::leaf(heuristic.evaluate(board));
    }

    let mut nodes = 1;
    let mut best_move = None;
    let mut best = if side.is_maximizing() {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };

    for col in &moves {
        let child = board.drop_piece(col, side);
        let result = search_with(
            heuristic,
            &child,
            depth - 1,
            side.other(),
            alpha,
            beta,
            use_pruning,
        );
        nodes += result.nodes;

        match side {
            Side::A => {
                // Strict improvement only: ties keep the leftmost column.
                if result.score > best {
                    best = result.score;
                    best_move = Some(col);
                }
                if use_pruning {
                    alpha = alpha.max(best);
                }
            }
            Side::B => {
                if result.score < best {
                    best = result.score;
                    best_move = Some(col);
                }
                if use_pruning {
                    beta = beta.min(best);
                }
            }
        }

        if use_pruning && alpha >= beta {
            break;
        }
    }

    SearchResult {
        score: best,
        best_move,
        nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{COLS, ROWS};

    const NEG_INF: f64 = f64::NEG_INFINITY;
    const INF: f64 = f64::INFINITY;

    fn board(rows: [&str; ROWS]) -> Board {
        Board::from_rows(&rows).unwrap()
    }

    /// Board where only `open` accepts a piece.
    fn single_open_column(open: usize) -> Board {
        let mut board = Board::empty();
        for col in (0..COLS).filter(|&c| c != open) {
            for row in 0..ROWS {
                let side = if (row + col / 2) % 2 == 0 { Side::A } else { Side::B };
                board = board.drop_piece(col, side);
            }
        }
        board
    }

    #[test]
    fn depth_zero_is_a_single_evaluation() {
        let b = Board::empty().drop_piece(3, Side::A);
        let result = search(&b, 0, Side::A, NEG_INF, INF, true);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
        assert_eq!(result.score, crate::ai::evaluate(&b));
    }

    #[test]
    fn full_board_has_no_move() {
        let mut b = single_open_column(6);
        for _ in 0..ROWS {
            b = b.drop_piece(6, Side::B);
        }
        let result = search(&b, 4, Side::A, NEG_INF, INF, false);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn single_legal_move_at_depth_one() {
        let b = single_open_column(4);
        for side in [Side::A, Side::B] {
            for pruning in [false, true] {
                let result = search(&b, 1, side, NEG_INF, INF, pruning);
                assert_eq!(result.best_move, Some(4));
                assert_eq!(result.nodes, 1 + 1);
            }
        }
    }

    #[test]
    fn depth_one_counts_every_child() {
        let result = search(&Board::empty(), 1, Side::A, NEG_INF, INF, false);
        assert_eq!(result.nodes, 1 + COLS as u64);
        // Centre drop is the only move that also earns the centre bonus.
        assert_eq!(result.best_move, Some(3));
        assert_eq!(result.score, 10.0);
    }

    #[test]
    fn ties_keep_leftmost_column() {
        // A full, alternating centre column makes the position mirror
        // symmetric, so every column ties with its reflection.
        let mut b = Board::empty();
        for side in [Side::B, Side::A, Side::B, Side::A, Side::B, Side::A] {
            b = b.drop_piece(3, side);
        }
        let result = search(&b, 1, Side::A, NEG_INF, INF, false);
        assert_eq!(result.best_move, Some(2));
        assert_eq!(result.score, 22.0);
        assert_eq!(result.nodes, 1 + 6);

        let result = search(&b, 1, Side::B, NEG_INF, INF, true);
        assert!(result.best_move.unwrap() < 3);
    }

    #[test]
    fn completes_four_in_a_row() {
        let b = board([
            ".......", ".......", ".......", ".......", "OOO....", "XXX....",
        ]);
        let result = search(&b, 1, Side::A, NEG_INF, INF, true);
        assert_eq!(result.best_move, Some(3));
        assert_eq!(result.score, 100_000.0);
    }

    #[test]
    fn blocks_opponent_four() {
        let b = board([
            ".......", ".......", ".......", ".......", "......X", "OOO..XX",
        ]);
        let result = search(&b, 2, Side::A, NEG_INF, INF, true);
        assert_eq!(result.best_move, Some(3));
        assert_eq!(result.score, 14.0);
    }

    #[test]
    fn pruning_matches_plain_minimax() {
        let positions = [
            Board::empty(),
            board([
                ".......", ".......", ".......", ".......", "...X...", "..OOX..",
            ]),
            board([
                ".......", ".......", "..XO...", ".XOXO..", "XOXOXO.", "OXOXOX.",
            ]),
            board([
                ".......", "...O...", "..XX...", "..OXO..", ".XOOX..", "XOXXOO.",
            ]),
        ];
        for b in &positions {
            for depth in 1..=4 {
                for side in [Side::A, Side::B] {
                    let plain = search(b, depth, side, NEG_INF, INF, false);
                    let pruned = search(b, depth, side, NEG_INF, INF, true);
                    assert_eq!(plain.score, pruned.score, "depth {depth}\n{b}");
                    assert_eq!(plain.best_move, pruned.best_move, "depth {depth}\n{b}");
                    assert!(pruned.nodes <= plain.nodes);
                }
            }
        }
    }

    #[test]
    fn search_is_repeatable() {
        let b = board([
            ".......", ".......", ".......", ".......", "...X...", "..OOX..",
        ]);
        let first = search(&b, 3, Side::A, NEG_INF, INF, true);
        let second = search(&b, 3, Side::A, NEG_INF, INF, true);
        assert_eq!(first, second);
        assert_eq!(first.score.to_bits(), second.score.to_bits());
    }
}
