use std::collections::HashSet;
use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;

use crate::error::BoardError;

/// Identifier for a single cell. Only equality and hashing are used, cells have no structure.
pub trait Cell: 'static + Debug + Copy + Eq + Hash + Send + Sync {}

impl<T: 'static + Debug + Copy + Eq + Hash + Send + Sync> Cell for T {}

/// Read-only view on the cells of a board, as seen by a bot.
///
/// Implementations must guarantee that every opened cell is also part of `all_cells`.
pub trait CellBoard: Debug + Clone + Send + Sync {
    /// The type used to identify cells on this board.
    type Cell: Cell;

    /// All cells on the board in a stable order.
    fn all_cells(&self) -> &[Self::Cell];

    /// Whether `cell` has already been opened by any player.
    fn is_opened(&self, cell: Self::Cell) -> bool;

    /// The cells that are not opened yet, in the order of [CellBoard::all_cells].
    fn available_cells(&self) -> Vec<Self::Cell> {
        self.all_cells()
            .iter()
            .copied()
            .filter(|&cell| !self.is_opened(cell))
            .collect()
    }

    /// Whether every cell has been opened.
    fn is_done(&self) -> bool {
        self.all_cells().iter().all(|&cell| self.is_opened(cell))
    }
}

/// A position on a rectangular grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GridCell {
    pub x: u16,
    pub y: u16,
}

impl GridCell {
    pub fn new(x: u16, y: u16) -> Self {
        GridCell { x, y }
    }
}

impl Display for GridCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// The owned board state of a session: the full ordered cell list and the set of opened cells.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BoardState<C: Cell> {
    all_cells: Vec<C>,
    /// The same cells as `all_cells`, for constant time membership checks.
    cell_index: HashSet<C>,
    opened_cells: HashSet<C>,
}

impl<C: Cell> BoardState<C> {
    /// Construct a board without any opened cells.
    /// An empty cell list is accepted here, bots will report it as [SelectorError::InvalidBoard](crate::error::SelectorError).
    pub fn new(all_cells: Vec<C>) -> Result<Self, BoardError<C>> {
        let mut cell_index = HashSet::with_capacity(all_cells.len());
        for &cell in &all_cells {
            if !cell_index.insert(cell) {
                return Err(BoardError::DuplicateCell(cell));
            }
        }

        Ok(BoardState {
            all_cells,
            cell_index,
            opened_cells: HashSet::new(),
        })
    }

    /// Construct a board where the given cells are already opened.
    pub fn with_opened(all_cells: Vec<C>, opened: impl IntoIterator<Item = C>) -> Result<Self, BoardError<C>> {
        let mut board = Self::new(all_cells)?;
        for cell in opened {
            match board.open(cell) {
                // opening the same cell twice in the input is harmless
                Ok(()) | Err(BoardError::AlreadyOpened(_)) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(board)
    }

    /// Mark `cell` as opened.
    pub fn open(&mut self, cell: C) -> Result<(), BoardError<C>> {
        if !self.cell_index.contains(&cell) {
            return Err(BoardError::UnknownCell(cell));
        }
        if !self.opened_cells.insert(cell) {
            return Err(BoardError::AlreadyOpened(cell));
        }
        Ok(())
    }

    pub fn opened_cells(&self) -> &HashSet<C> {
        &self.opened_cells
    }

    pub fn opened_count(&self) -> usize {
        self.opened_cells.len()
    }

    pub fn cell_count(&self) -> usize {
        self.all_cells.len()
    }
}

impl BoardState<GridCell> {
    /// A `width x height` grid with all cells closed, in row-major order.
    pub fn grid(width: u16, height: u16) -> Self {
        let all_cells: Vec<GridCell> = (0..height)
            .flat_map(|y| (0..width).map(move |x| GridCell::new(x, y)))
            .collect();

        BoardState {
            cell_index: all_cells.iter().copied().collect(),
            all_cells,
            opened_cells: HashSet::new(),
        }
    }
}

impl<C: Cell> CellBoard for BoardState<C> {
    type Cell = C;

    fn all_cells(&self) -> &[C] {
        &self.all_cells
    }

    fn is_opened(&self, cell: C) -> bool {
        self.opened_cells.contains(&cell)
    }

    fn is_done(&self) -> bool {
        self.opened_cells.len() == self.all_cells.len()
    }
}

impl<C: Cell> Display for BoardState<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} cells opened", self.opened_count(), self.cell_count())
    }
}
