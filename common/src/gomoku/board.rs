use super::error::BoardError;
use super::types::{BOARD_SIZE, Cell, Player};

/// Square grid of cells addressed by (row, col).
///
/// The board itself allows overwriting a cell; keeping stones permanent is
/// up to the turn controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if !Self::in_bounds(row, col) {
            return Err(BoardError::OutOfRange { row, col });
        }
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> Result<(), BoardError> {
        if !Self::in_bounds(row, col) {
            return Err(BoardError::OutOfRange { row, col });
        }
        self.cells[row][col] = value;
        Ok(())
    }

    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        self.get(row, col).map(|cell| cell.is_empty())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.cells.iter()
    }

    pub fn stone_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    pub fn stones_of(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Stone(player))
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    /// Row-major grid of 0 (empty), 1 (black) and 2 (white).
    pub fn to_wire(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(Cell::to_wire).collect())
            .collect()
    }
}
