mod agent;
mod chance;
mod engine;
mod expectiminimax;
mod heuristic;
mod minimax;
mod random;
mod search_result;

pub use agent::{Agent, SearchAgent};
pub use chance::{
    chance_outcomes, ChanceOutcome, ChanceOutcomes, INTENDED_PROBABILITY,
    ONE_SIDED_DRIFT_PROBABILITY, SPLIT_DRIFT_PROBABILITY,
};
pub use engine::{
    compare_pruning, run, Algorithm, EngineReport, PruningComparison, SearchConfig, MAX_DEPTH,
};
pub use expectiminimax::{expected_search, expected_search_pruned, ExpectedSearch};
pub use heuristic::{evaluate, Heuristic, WindowHeuristic, CENTER_WEIGHT, WINDOW_WEIGHTS};
pub use minimax::{search, search_with};
pub use random::RandomAgent;
pub use search_result::SearchResult;
