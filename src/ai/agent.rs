use super::engine::{EngineReport, SearchConfig};
use crate::game::GameState;

/// Universal interface for anything that picks columns.
pub trait Agent {
    /// Select a column for the side to move, or `None` if no column is legal.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Engine report behind the most recent selection, for agents that search.
    fn last_report(&self) -> Option<&EngineReport> {
        None
    }
}

/// Agent backed by the search engine.
///
/// Searches for whichever side is to move; scores stay in side A's frame, so
/// the engine maximizes as A and minimizes as B.
pub struct SearchAgent {
    config: SearchConfig,
    name: String,
    last_report: Option<EngineReport>,
}

impl SearchAgent {
    pub fn new(config: SearchConfig) -> Self {
        SearchAgent {
            name: format!("{} (depth {})", config.algorithm, config.depth),
            config,
            last_report: None,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Agent for SearchAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        let config = SearchConfig {
            side: state.current_side(),
            ..self.config
        };
        let report = config.run(state.board());
        self.last_report = Some(report);
        report.chosen_move
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn last_report(&self) -> Option<&EngineReport> {
        self.last_report.as_ref()
    }
}
