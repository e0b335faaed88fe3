use std::fmt::Debug;

use crate::board::CellBoard;
use crate::error::SelectorError;

pub use adaptive::{AdaptiveBot, AdaptiveSelector, BotMoveState, MoveDecision};

pub mod adaptive;
pub mod simple;

pub trait Bot<B: CellBoard>: Debug {
    /// Decide what to do this turn: wait, or act on a cell that is not opened yet.
    /// Returns [SelectorError::InvalidBoard] if the board has no cells at all.
    ///
    /// `self` is mutable to allow for random state and for state the bot carries between turns.
    fn select_move(&mut self, board: &B) -> Result<MoveDecision<B::Cell>, SelectorError>;
}

impl<B: CellBoard, F: FnMut(&B) -> Result<MoveDecision<B::Cell>, SelectorError> + Debug> Bot<B> for F {
    fn select_move(&mut self, board: &B) -> Result<MoveDecision<B::Cell>, SelectorError> {
        self(board)
    }
}
