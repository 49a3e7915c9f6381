use super::game::GameRecord;
use crate::game::{GameOutcome, Side};

/// Aggregated results of a series of engine-vs-opponent games.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchStats {
    games: usize,
    engine_wins: usize,
    opponent_wins: usize,
    ties: usize,
    draws: usize,
    total_moves: usize,
    drifted_moves: usize,
    engine_nodes: u64,
    engine_moves: usize,
}

impl MatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_game(&mut self, record: &GameRecord) {
        self.games += 1;
        match record.outcome {
            GameOutcome::Winner(Side::A) => self.engine_wins += 1,
            GameOutcome::Winner(Side::B) => self.opponent_wins += 1,
            GameOutcome::Tie => self.ties += 1,
            GameOutcome::Draw => self.draws += 1,
        }
        self.total_moves += record.game_length();
        self.drifted_moves += record.drifted_moves();
        self.engine_nodes += record.engine_nodes;
        self.engine_moves += record.engine_moves;
    }

    pub fn games(&self) -> usize {
        self.games
    }

    pub fn engine_wins(&self) -> usize {
        self.engine_wins
    }

    pub fn opponent_wins(&self) -> usize {
        self.opponent_wins
    }

    pub fn ties(&self) -> usize {
        self.ties
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn drifted_moves(&self) -> usize {
        self.drifted_moves
    }

    pub fn engine_nodes(&self) -> u64 {
        self.engine_nodes
    }

    /// Fraction of games the engine won outright.
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.engine_wins as f64 / self.games as f64
    }

    pub fn average_game_length(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.games as f64
    }

    pub fn average_nodes_per_move(&self) -> f64 {
        if self.engine_moves == 0 {
            return 0.0;
        }
        self.engine_nodes as f64 / self.engine_moves as f64
    }
}
