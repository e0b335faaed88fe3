//! A baseline bot that acts on every turn: `RandomBot`.
use std::fmt::{Debug, Formatter};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ai::{Bot, MoveDecision};
use crate::board::CellBoard;
use crate::error::SelectorError;

/// Bot that opens a uniformly random available cell every turn, and only waits when there is nothing left to open.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for RandomBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        RandomBot { rng }
    }
}

impl<B: CellBoard, R: Rng> Bot<B> for RandomBot<R> {
    fn select_move(&mut self, board: &B) -> Result<MoveDecision<B::Cell>, SelectorError> {
        if board.all_cells().is_empty() {
            return Err(SelectorError::InvalidBoard);
        }

        Ok(match board.available_cells().choose(&mut self.rng) {
            Some(&cell) => MoveDecision::Act(cell),
            None => MoveDecision::Wait,
        })
    }
}
