//! Single entry point for callers: pick an algorithm, search, time it.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::debug;
use serde::{Deserialize, Serialize, Serializer};

use super::expectiminimax::{expected_search, expected_search_pruned};
use super::minimax::search;
use super::search_result::SearchResult;
use crate::error::ParseAlgorithmError;
use crate::game::{Board, Side};

/// Deepest search the configuration layer accepts.
pub const MAX_DEPTH: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
    Expectiminimax,
    ExpectiminimaxPruned,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Minimax,
        Algorithm::AlphaBeta,
        Algorithm::Expectiminimax,
        Algorithm::ExpectiminimaxPruned,
    ];

    /// Whether the engine's own drops drift under this algorithm's model.
    pub fn is_stochastic(self) -> bool {
        matches!(
            self,
            Algorithm::Expectiminimax | Algorithm::ExpectiminimaxPruned
        )
    }

    pub fn uses_pruning(self) -> bool {
        matches!(self, Algorithm::AlphaBeta | Algorithm::ExpectiminimaxPruned)
    }

    /// Same family with pruning switched on or off.
    pub fn with_pruning(self, pruning: bool) -> Algorithm {
        match (self.is_stochastic(), pruning) {
            (false, false) => Algorithm::Minimax,
            (false, true) => Algorithm::AlphaBeta,
            (true, false) => Algorithm::Expectiminimax,
            (true, true) => Algorithm::ExpectiminimaxPruned,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alpha-beta",
            Algorithm::Expectiminimax => "expectiminimax",
            Algorithm::ExpectiminimaxPruned => "expectiminimax-pruned",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "minimax" | "plain" => Ok(Algorithm::Minimax),
            "alpha-beta" | "alphabeta" | "pruned" => Ok(Algorithm::AlphaBeta),
            "expectiminimax" | "expected" => Ok(Algorithm::Expectiminimax),
            "expectiminimax-pruned" | "expected-pruned" => Ok(Algorithm::ExpectiminimaxPruned),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// What to search and for whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub depth: u32,
    pub side: Side,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            algorithm: Algorithm::AlphaBeta,
            depth: 5,
            side: Side::A,
        }
    }
}

impl SearchConfig {
    pub fn run(&self, board: &Board) -> EngineReport {
        run(board, self.depth, self.side, self.algorithm)
    }
}

/// Outcome of one engine invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngineReport {
    pub algorithm: Algorithm,
    pub depth: u32,
    /// Column to play; `None` means the board is full and the game is over.
    pub chosen_move: Option<usize>,
    pub score: f64,
    pub nodes_visited: u64,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

fn serialize_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64() * 1000.0)
}

/// Search `board` for `side` and report the chosen column.
pub fn run(board: &Board, depth: u32, side: Side, algorithm: Algorithm) -> EngineReport {
    let start = Instant::now();
    let result: SearchResult = match algorithm {
        Algorithm::Minimax | Algorithm::AlphaBeta => search(
            board,
            depth,
            side,
            f64::NEG_INFINITY,
            f64::INFINITY,
            algorithm.uses_pruning(),
        ),
        Algorithm::Expectiminimax => expected_search(board, depth, side),
        Algorithm::ExpectiminimaxPruned => expected_search_pruned(board, depth, side),
    };
    let elapsed = start.elapsed();

    debug!(
        "{algorithm} depth={depth} side={side}: move={:?} score={} nodes={} in {:?}",
        result.best_move, result.score, result.nodes, elapsed
    );

    EngineReport {
        algorithm,
        depth,
        chosen_move: result.best_move,
        score: result.score,
        nodes_visited: result.nodes,
        elapsed,
    }
}

/// Unpruned and pruned runs of one algorithm family on the same position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PruningComparison {
    pub unpruned: EngineReport,
    pub pruned: EngineReport,
}

impl PruningComparison {
    /// Percentage of unpruned nodes that pruning skipped.
    pub fn node_reduction(&self) -> f64 {
        if self.unpruned.nodes_visited == 0 {
            return 0.0;
        }
        let saved = self.unpruned.nodes_visited.saturating_sub(self.pruned.nodes_visited);
        saved as f64 / self.unpruned.nodes_visited as f64 * 100.0
    }

    /// Unpruned time over pruned time; 0 when the pruned run was too fast to
    /// measure.
    pub fn speedup(&self) -> f64 {
        let pruned = self.pruned.elapsed.as_secs_f64();
        if pruned > 0.0 {
            self.unpruned.elapsed.as_secs_f64() / pruned
        } else {
            0.0
        }
    }

    pub fn agrees(&self) -> bool {
        self.unpruned.chosen_move == self.pruned.chosen_move
            && self.unpruned.score == self.pruned.score
    }
}

/// Run both variants of the deterministic or stochastic family.
pub fn compare_pruning(board: &Board, depth: u32, side: Side, stochastic: bool) -> PruningComparison {
    let family = if stochastic {
        Algorithm::Expectiminimax
    } else {
        Algorithm::Minimax
    };
    PruningComparison {
        unpruned: run(board, depth, side, family.with_pruning(false)),
        pruned: run(board, depth, side, family.with_pruning(true)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{COLS, ROWS};

    fn mid_game() -> Board {
        "......./......./..XO.../.XOXO../XOXOXO./OXOXOX."
            .parse()
            .unwrap()
    }

    fn opening() -> Board {
        "......./......./......./......./...X.../..OOX.."
            .parse()
            .unwrap()
    }

    #[test]
    fn minimax_reference_position() {
        let report = run(&mid_game(), 5, Side::A, Algorithm::Minimax);
        assert_eq!(report.chosen_move, Some(3));
        assert_eq!(report.score, 301.0);
        assert_eq!(report.nodes_visited, 18708);
    }

    #[test]
    fn alpha_beta_reference_position() {
        let report = run(&mid_game(), 5, Side::A, Algorithm::AlphaBeta);
        assert_eq!(report.chosen_move, Some(3));
        assert_eq!(report.score, 301.0);
        assert_eq!(report.nodes_visited, 3374);
    }

    #[test]
    fn expectiminimax_reference_position() {
        for algorithm in [Algorithm::Expectiminimax, Algorithm::ExpectiminimaxPruned] {
            let report = run(&opening(), 1, Side::A, algorithm);
            assert_eq!(report.chosen_move, Some(4), "{algorithm}");
            assert_eq!(report.score, 37.0, "{algorithm}");
            assert_eq!(report.nodes_visited, 19, "{algorithm}");
        }
    }

    #[test]
    fn full_board_reports_no_move() {
        let mut board = Board::empty();
        for col in 0..COLS {
            for row in 0..ROWS {
                let side = if (row + col) % 3 == 0 { Side::A } else { Side::B };
                board = board.drop_piece(col, side);
            }
        }
        for algorithm in Algorithm::ALL {
            let report = run(&board, 3, Side::A, algorithm);
            assert_eq!(report.chosen_move, None, "{algorithm}");
            assert_eq!(report.nodes_visited, 1, "{algorithm}");
        }
    }

    #[test]
    fn compare_pruning_deterministic() {
        let cmp = compare_pruning(&mid_game(), 5, Side::A, false);
        assert!(cmp.agrees());
        assert_eq!(cmp.unpruned.algorithm, Algorithm::Minimax);
        assert_eq!(cmp.pruned.algorithm, Algorithm::AlphaBeta);
        let expected = (18708.0 - 3374.0) / 18708.0 * 100.0;
        assert!((cmp.node_reduction() - expected).abs() < 1e-9);
    }

    #[test]
    fn compare_pruning_stochastic() {
        let cmp = compare_pruning(&opening(), 3, Side::A, true);
        assert!(cmp.agrees());
        assert!(cmp.pruned.nodes_visited < cmp.unpruned.nodes_visited);
    }

    #[test]
    fn parse_algorithm_names() {
        assert_eq!("plain".parse::<Algorithm>().unwrap(), Algorithm::Minimax);
        assert_eq!("alphabeta".parse::<Algorithm>().unwrap(), Algorithm::AlphaBeta);
        assert_eq!(
            "expected_pruned".parse::<Algorithm>().unwrap(),
            Algorithm::ExpectiminimaxPruned
        );
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert!("mcts".parse::<Algorithm>().is_err());
    }

    #[test]
    fn report_serializes_to_json() {
        let report = run(&opening(), 1, Side::A, Algorithm::Expectiminimax);
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["algorithm"], "expectiminimax");
        assert_eq!(json["chosen_move"], 4);
        assert_eq!(json["nodes_visited"], 19);
        assert!(json["elapsed_ms"].is_number());
    }

    #[test]
    fn run_is_repeatable() {
        for algorithm in Algorithm::ALL {
            let first = run(&opening(), 3, Side::A, algorithm);
            let second = run(&opening(), 3, Side::A, algorithm);
            assert_eq!(first.chosen_move, second.chosen_move);
            assert_eq!(first.score.to_bits(), second.score.to_bits());
            assert_eq!(first.nodes_visited, second.nodes_visited);
        }
    }
}
