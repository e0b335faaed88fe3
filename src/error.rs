//! Error types for the selector, the board and the turn driver.
use std::fmt::Debug;

use thiserror::Error;

/// The only failure the selector can signal. Waiting is never an error.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum SelectorError {
    #[error("Board has no cells")]
    InvalidBoard,
}

#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum BoardError<C: Debug + 'static> {
    #[error("Cell {0:?} is not on this board")]
    UnknownCell(C),
    #[error("Cell {0:?} is already opened")]
    AlreadyOpened(C),
    #[error("Cell {0:?} appears more than once")]
    DuplicateCell(C),
}

#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Bias growth must be in (0, 1], got {0}")]
    InvalidBiasGrowth(f64),
}

/// Errors that abort a session run by the turn driver.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum SessionError<C: Debug + 'static> {
    #[error(transparent)]
    Selector(#[from] SelectorError),
    #[error("Bot picked a cell the board rejected: {0}")]
    Board(#[from] BoardError<C>),
    #[error("Session needs at least one bot")]
    NoBots,
}
