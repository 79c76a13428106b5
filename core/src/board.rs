// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and manipulation

use crate::{config::GridSize, Color, GameError};

/// Number of slots held by every cell
pub const SLOTS_PER_CELL: usize = 4;

/// A slot is either empty or owned by a color
pub type Slot = Option<Color>;

/// One grid position holding four slots, filled in order 0..3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    slots: [Slot; SLOTS_PER_CELL],
}

impl Cell {
    /// A cell with every slot empty
    pub const EMPTY: Cell = Cell {
        slots: [None; SLOTS_PER_CELL],
    };

    /// Build a cell from raw slot values
    pub fn from_slots(slots: [Slot; SLOTS_PER_CELL]) -> Self {
        Self { slots }
    }

    /// A full cell owned entirely by `color`
    pub fn filled(color: Color) -> Self {
        Self {
            slots: [Some(color); SLOTS_PER_CELL],
        }
    }

    /// Raw slot values
    pub fn slots(&self) -> &[Slot; SLOTS_PER_CELL] {
        &self.slots
    }

    /// No slot is empty
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Index of the first empty slot, if any
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// The owning color of a full cell whose four slots agree
    pub fn mono_color(&self) -> Option<Color> {
        let first = self.slots[0]?;
        self.slots
            .iter()
            .all(|slot| *slot == Some(first))
            .then_some(first)
    }

    /// Full and single-colored
    pub fn is_mono_color(&self) -> bool {
        self.mono_color().is_some()
    }

    /// Full with both colors present
    pub fn is_contested(&self) -> bool {
        self.is_full() && !self.is_mono_color()
    }

    /// Number of slots owned by `color`
    pub fn count(&self, color: Color) -> usize {
        self.slots.iter().filter(|slot| **slot == Some(color)).count()
    }

    /// Occupy the first empty slot, returning its position
    pub(crate) fn fill(&mut self, color: Color) -> Option<usize> {
        let slot = self.first_empty_slot()?;
        self.slots[slot] = Some(color);
        Some(slot)
    }

    /// Force every slot to `color`
    pub(crate) fn paint(&mut self, color: Color) {
        self.slots = [Some(color); SLOTS_PER_CELL];
    }
}

/// Square grid of cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Cells per side
    size: GridSize,
    /// Cells in row-major order
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the specified size
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::EMPTY; size.cells()],
        }
    }

    /// Create a new empty board from a raw size, rejecting sizes outside 2..=10
    pub fn with_size(size: u8) -> Result<Self, GameError> {
        GridSize::new(size).map(Self::new)
    }

    /// Build a board from existing cells. Returns `None` if the number of
    /// cells does not match the grid size.
    pub fn from_cells(size: GridSize, cells: Vec<Cell>) -> Option<Self> {
        (cells.len() == size.cells()).then_some(Self { size, cells })
    }

    /// Cells per side
    pub fn size(&self) -> u8 {
        self.size.get()
    }

    /// Cells per side as a validated grid size
    pub fn grid_size(&self) -> GridSize {
        self.size
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `index` addresses a cell of this board
    pub fn contains(&self, index: usize) -> bool {
        index < self.cells.len()
    }

    /// Get the cell at the specified index
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// Every slot on the board is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Cell::is_full)
    }

    /// No full cell mixes both colors
    pub fn is_stable(&self) -> bool {
        !self.cells.iter().any(Cell::is_contested)
    }

    /// Total slots owned by `color`
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().map(|cell| cell.count(color)).sum()
    }

    /// Indices of cells with at least one empty slot, ascending
    pub fn legal_moves(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_full())
            .map(|(index, _)| index)
    }

    /// Convert a (row, column) pair to a cell index
    pub fn index_of(&self, row: u8, col: u8) -> Option<usize> {
        let size = self.size();
        (row < size && col < size).then(|| row as usize * size as usize + col as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::with_size(3).unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.cell_count(), 9);
        assert!(board.cells().iter().all(|c| *c == Cell::EMPTY));
        assert_eq!(board.legal_moves().count(), 9);
    }

    #[test]
    fn test_board_rejects_out_of_range_size() {
        assert_eq!(Board::with_size(1), Err(GameError::InvalidConfiguration(1)));
        assert_eq!(Board::with_size(11), Err(GameError::InvalidConfiguration(11)));
    }

    #[test]
    fn test_clone_is_deep() {
        let board = Board::with_size(2).unwrap();
        let mut copy = board.clone();
        copy.cell_mut(0).unwrap().fill(Color::First);
        assert_eq!(board.cell(0), Some(&Cell::EMPTY));
        assert_ne!(board, copy);
    }

    #[test]
    fn test_cell_fill_order() {
        let mut cell = Cell::EMPTY;
        assert_eq!(cell.fill(Color::First), Some(0));
        assert_eq!(cell.fill(Color::Second), Some(1));
        assert_eq!(cell.first_empty_slot(), Some(2));
        assert!(!cell.is_full());
        assert_eq!(cell.mono_color(), None);
    }

    #[test]
    fn test_cell_classification() {
        let mono = Cell::filled(Color::Second);
        assert!(mono.is_full());
        assert_eq!(mono.mono_color(), Some(Color::Second));
        assert!(!mono.is_contested());

        let mixed = Cell::from_slots([
            Some(Color::First),
            Some(Color::Second),
            Some(Color::First),
            Some(Color::First),
        ]);
        assert!(mixed.is_contested());
        assert_eq!(mixed.count(Color::First), 3);

        let partial = Cell::from_slots([Some(Color::First), None, None, None]);
        assert!(!partial.is_mono_color());
        assert!(!partial.is_contested());
    }

    #[test]
    fn test_index_of() {
        let board = Board::with_size(4).unwrap();
        assert_eq!(board.index_of(1, 2), Some(6));
        assert_eq!(board.index_of(4, 0), None);
    }

    #[test]
    fn test_from_cells_checks_length() {
        let size = GridSize::new(2).unwrap();
        assert!(Board::from_cells(size, vec![Cell::EMPTY; 4]).is_some());
        assert!(Board::from_cells(size, vec![Cell::EMPTY; 3]).is_none());
    }
}
