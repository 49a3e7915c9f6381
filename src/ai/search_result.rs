use serde::Serialize;

/// Backed-up value of one search call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchResult {
    /// Score from side A's point of view.
    pub score: f64,
    /// Best column at this node; `None` only when the node was a leaf.
    pub best_move: Option<usize>,
    /// Tree nodes visited to produce this result.
    pub nodes: u64,
}

impl SearchResult {
    pub(crate) fn leaf(score: f64) -> Self {
        SearchResult {
            score,
            best_move: None,
            nodes: 1,
        }
    }
}
