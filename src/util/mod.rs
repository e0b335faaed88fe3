//! Various utility functions.
pub mod board_gen;
pub mod tiny;
pub mod turn_driver;
