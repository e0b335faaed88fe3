//! Utilities to generate a `BoardState` in a random state.
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{BoardState, Cell, CellBoard};

/// Generate a board by opening `n` distinct random cells on `start`.
/// If fewer than `n` cells are available all of them are opened.
pub fn random_board_with_opened<C: Cell>(start: &BoardState<C>, n: usize, rng: &mut impl Rng) -> BoardState<C> {
    let mut board = start.clone();
    let available = start.available_cells();

    for &cell in available.choose_multiple(rng, n) {
        // cells come from the available list and are distinct, so opening can't fail
        board.open(cell).unwrap();
    }

    board
}

/// Generate a board by opening every cell independently with probability `p`. Panics if `p` is not in `[0, 1]`.
pub fn random_board_with_density<C: Cell>(start: &BoardState<C>, p: f64, rng: &mut impl Rng) -> BoardState<C> {
    let mut board = start.clone();
    for cell in start.available_cells() {
        if rng.gen_bool(p) {
            board.open(cell).unwrap();
        }
    }
    board
}
