//! Drift model for the stochastic variant: an intended drop may land one
//! column to the left or right.

use rand::Rng;
use serde::Serialize;

use crate::game::Board;

/// Weight of the intended column landing where it was aimed.
pub const INTENDED_PROBABILITY: f64 = 0.6;
/// Weight of each neighbour when both neighbours can take a piece.
pub const SPLIT_DRIFT_PROBABILITY: f64 = 0.2;
/// Weight of the single neighbour when only one side can take a piece.
pub const ONE_SIDED_DRIFT_PROBABILITY: f64 = 0.4;

/// One possible landing column for an intended move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChanceOutcome {
    pub col: usize,
    pub probability: f64,
}

/// Landing columns for one intended move, intended column first.
///
/// When neither neighbour can take a piece the only outcome carries weight
/// 0.6, not 1.0. Expectations computed from these outcomes use the weights
/// exactly as listed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChanceOutcomes {
    items: [ChanceOutcome; 3],
    len: usize,
}

impl ChanceOutcomes {
    fn single(col: usize) -> Self {
        let outcome = ChanceOutcome {
            col,
            probability: INTENDED_PROBABILITY,
        };
        ChanceOutcomes {
            items: [outcome; 3],
            len: 1,
        }
    }

    fn push(&mut self, col: usize, probability: f64) {
        self.items[self.len] = ChanceOutcome { col, probability };
        self.len += 1;
    }

    pub fn as_slice(&self) -> &[ChanceOutcome] {
        &self.items[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChanceOutcome> {
        self.as_slice().iter()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sum of the listed weights: 1.0, or 0.6 when no drift is possible.
    pub fn total_probability(&self) -> f64 {
        self.iter().map(|o| o.probability).sum()
    }

    /// Draw the column a piece actually lands in.
    ///
    /// Weights are taken relative to their total, so a move with no possible
    /// drift always lands where it was aimed.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let mut roll = rng.random::<f64>() * self.total_probability();
        for outcome in self.iter() {
            if roll < outcome.probability {
                return outcome.col;
            }
            roll -= outcome.probability;
        }
        self.items[self.len - 1].col
    }
}

impl<'a> IntoIterator for &'a ChanceOutcomes {
    type Item = &'a ChanceOutcome;
    type IntoIter = std::slice::Iter<'a, ChanceOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Possible landing columns for a piece aimed at `intended_col`.
pub fn chance_outcomes(board: &Board, intended_col: usize) -> ChanceOutcomes {
    let mut outcomes = ChanceOutcomes::single(intended_col);

    let left = intended_col
        .checked_sub(1)
        .filter(|&col| board.is_valid_move(col));
    let right = Some(intended_col + 1).filter(|&col| board.is_valid_move(col));

    match (left, right) {
        (Some(left), Some(right)) => {
            outcomes.push(left, SPLIT_DRIFT_PROBABILITY);
            outcomes.push(right, SPLIT_DRIFT_PROBABILITY);
        }
        (Some(left), None) => outcomes.push(left, ONE_SIDED_DRIFT_PROBABILITY),
        (None, Some(right)) => outcomes.push(right, ONE_SIDED_DRIFT_PROBABILITY),
        (None, None) => {}
    }

    outcomes
}
