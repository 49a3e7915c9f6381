//! Headless games between the search engine and an opponent agent.

mod game;
mod stats;

pub use game::{play_game, GameRecord, MoveRecord};
pub use stats::MatchStats;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::ai::{RandomAgent, SearchAgent, SearchConfig};
use crate::error::SessionError;
use crate::game::Side;

/// Match settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub games: usize,
    /// Whether the engine (side A) drops the first piece.
    pub engine_first: bool,
    /// Seed for the opponent and for drift; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            games: 10,
            engine_first: true,
            seed: None,
        }
    }
}

/// Play `session.games` games of the engine against a random opponent.
///
/// Drift is applied to the engine's drops exactly when its algorithm models
/// drift.
pub fn play_match(search: SearchConfig, session: &SessionConfig) -> Result<MatchStats, SessionError> {
    let (mut rng, mut opponent) = match session.seed {
        Some(seed) => (
            StdRng::seed_from_u64(seed),
            RandomAgent::seeded(seed.wrapping_add(1)),
        ),
        None => (StdRng::from_os_rng(), RandomAgent::new()),
    };
    let mut engine = SearchAgent::new(SearchConfig {
        side: Side::A,
        ..search
    });
    let first = if session.engine_first { Side::A } else { Side::B };
    let drift = search.algorithm.is_stochastic();

    let mut stats = MatchStats::new();
    for game in 1..=session.games {
        let record = play_game(&mut engine, &mut opponent, first, drift, &mut rng)?;
        log::info!(
            "game {game}/{}: {:?}, engine searched {} nodes",
            session.games,
            record.outcome,
            record.engine_nodes
        );
        stats.record_game(&record);
    }
    Ok(stats)
}
