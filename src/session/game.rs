use log::{debug, info};
use rand::Rng;

use crate::ai::{chance_outcomes, Agent};
use crate::error::SessionError;
use crate::game::{FourCounts, GameOutcome, GameState, Side};

/// One played move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub side: Side,
    /// Column the agent asked for.
    pub intended: usize,
    /// Column the piece ended up in; differs from `intended` only after drift.
    pub landed: usize,
}

/// Everything worth keeping about a finished game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub fours: FourCounts,
    pub moves: Vec<MoveRecord>,
    /// Nodes the engine visited over the whole game.
    pub engine_nodes: u64,
    pub engine_moves: usize,
}

impl GameRecord {
    pub fn game_length(&self) -> usize {
        self.moves.len()
    }

    pub fn drifted_moves(&self) -> usize {
        self.moves.iter().filter(|m| m.intended != m.landed).count()
    }
}

/// Play one game to a full board: `engine` plays side A, `opponent` side B.
///
/// With `drift` set, each of the engine's drops is perturbed by the chance
/// model before it lands. The opponent's drops never drift.
pub fn play_game<R: Rng>(
    engine: &mut dyn Agent,
    opponent: &mut dyn Agent,
    first: Side,
    drift: bool,
    rng: &mut R,
) -> Result<GameRecord, SessionError> {
    let mut state = GameState::initial(first);
    let mut moves = Vec::new();
    let mut engine_nodes = 0;
    let mut engine_moves = 0;

    while !state.is_terminal() {
        let side = state.current_side();
        let agent: &mut dyn Agent = match side {
            Side::A => &mut *engine,
            Side::B => &mut *opponent,
        };

        let intended = agent.select_action(&state).ok_or_else(|| SessionError::NoAction {
            agent: agent.name().to_string(),
        })?;
        if let Some(report) = agent.last_report() {
            engine_nodes += report.nodes_visited;
            engine_moves += 1;
        }

        let landed = if drift && side == Side::A && state.board().is_valid_move(intended) {
            chance_outcomes(state.board(), intended).sample(rng)
        } else {
            intended
        };
        if landed != intended {
            debug!("{side}: column {intended} drifted to {landed}");
        }

        state = state
            .apply_move(landed)
            .map_err(|source| SessionError::IllegalAction {
                agent: agent.name().to_string(),
                action: landed,
                source,
            })?;
        moves.push(MoveRecord {
            side,
            intended,
            landed,
        });
    }

    let fours = state.four_counts();
    let outcome = fours.outcome();
    info!(
        "game over after {} moves: {:?} (fours A={} B={})",
        moves.len(),
        outcome,
        fours.a,
        fours.b
    );

    Ok(GameRecord {
        outcome,
        fours,
        moves,
        engine_nodes,
        engine_moves,
    })
}
