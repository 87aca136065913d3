//! Board module - manages the playfield grid
//!
//! The board is a 12x22 grid that includes its own walls: columns 0 and 11 and
//! row 21 are [`Cell::Wall`] for the lifetime of the board and cannot be
//! overwritten. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x grows to the right and y grows downwards.

use crate::geometry::{is_occupied, MASK_SIZE};
use crate::types::{Cell, PieceKind, Rotation, FIELD_HEIGHT, FIELD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (FIELD_WIDTH as usize) * (FIELD_HEIGHT as usize);

/// The playfield - flat array storage, walls included
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create an empty board surrounded by walls
    pub fn new() -> Self {
        let mut cells = [Cell::Empty; BOARD_SIZE];
        for y in 0..FIELD_HEIGHT as i8 {
            for x in 0..FIELD_WIDTH as i8 {
                if Self::is_border(x, y) {
                    cells[Self::flat(x, y)] = Cell::Wall;
                }
            }
        }
        Self { cells }
    }

    #[inline(always)]
    fn flat(x: i8, y: i8) -> usize {
        (y as usize) * (FIELD_WIDTH as usize) + (x as usize)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::is_out_of_bounds(x, y) {
            return None;
        }
        Some(Self::flat(x, y))
    }

    /// Check if position lies outside the grid (walls are inside the grid)
    #[inline(always)]
    pub fn is_out_of_bounds(x: i8, y: i8) -> bool {
        x < 0 || x >= FIELD_WIDTH as i8 || y < 0 || y >= FIELD_HEIGHT as i8
    }

    /// Check if position is one of the wall/floor cells
    pub fn is_border(x: i8, y: i8) -> bool {
        x == 0 || x == FIELD_WIDTH as i8 - 1 || y == FIELD_HEIGHT as i8 - 1
    }

    pub fn width(&self) -> u8 {
        FIELD_WIDTH
    }

    pub fn height(&self) -> u8 {
        FIELD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set an interior cell at position (x, y)
    ///
    /// Returns false (and leaves the board untouched) for out of bounds
    /// positions, wall positions, and attempts to write a wall.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if Self::is_border(x, y) || cell == Cell::Wall {
            return false;
        }
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Empty))
    }

    /// Check whether `kind` in `rotation` with its mask's top-left corner at
    /// `(x, y)` can be placed: every occupied mask cell must be in bounds and
    /// land on an empty cell.
    ///
    /// This is the single collision test used for movement, rotation, gravity,
    /// hard drop and spawning.
    pub fn fits(&self, kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> bool {
        for py in 0..MASK_SIZE {
            for px in 0..MASK_SIZE {
                if is_occupied(kind, rotation, px, py)
                    && !self.is_free(x + px as i8, y + py as i8)
                {
                    return false;
                }
            }
        }
        true
    }

    /// Lock a piece onto the board, tagging every occupied mask cell with `kind`.
    ///
    /// Returns false, leaving the board unchanged, if the piece does not fit.
    pub fn lock(&mut self, kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> bool {
        if !self.fits(kind, rotation, x, y) {
            return false;
        }
        for py in 0..MASK_SIZE {
            for px in 0..MASK_SIZE {
                if is_occupied(kind, rotation, px, py) {
                    let idx = Self::flat(x + px as i8, y + py as i8);
                    self.cells[idx] = Cell::Piece(kind);
                }
            }
        }
        true
    }

    /// Whether `y` is a row pieces can occupy (not the floor, not outside)
    pub fn is_playable_row(y: i8) -> bool {
        y >= 0 && y < FIELD_HEIGHT as i8 - 1
    }

    /// Check if every interior cell of a playable row is non-empty
    pub fn is_row_complete(&self, y: i8) -> bool {
        if !Self::is_playable_row(y) {
            return false;
        }
        (1..FIELD_WIDTH as i8 - 1).all(|x| !self.cells[Self::flat(x, y)].is_empty())
    }

    /// Tag every interior cell of row `y` as clearing
    pub fn mark_row(&mut self, y: i8) {
        if !Self::is_playable_row(y) {
            return;
        }
        for x in 1..FIELD_WIDTH as i8 - 1 {
            self.cells[Self::flat(x, y)] = Cell::Clearing;
        }
    }

    /// Remove row `y`: every interior cell above it moves down by one and the
    /// top row becomes empty. Walls never move.
    pub fn remove_row(&mut self, y: i8) {
        if !Self::is_playable_row(y) {
            return;
        }
        for x in 1..FIELD_WIDTH as i8 - 1 {
            for row in (1..=y).rev() {
                self.cells[Self::flat(x, row)] = self.cells[Self::flat(x, row - 1)];
            }
            self.cells[Self::flat(x, 0)] = Cell::Empty;
        }
    }

    /// Iterate over the rows of the board as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(FIELD_WIDTH as usize)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of non-empty interior cells
    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, Cell::Piece(_) | Cell::Clearing))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(11, 0), Some(11));
        assert_eq!(Board::index(0, 1), Some(12));
        assert_eq!(Board::index(11, 21), Some(263));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(12, 0), None);
        assert_eq!(Board::index(0, 22), None);
    }

    #[test]
    fn test_new_board_has_walls_and_floor() {
        let board = Board::new();
        for y in 0..FIELD_HEIGHT as i8 {
            assert_eq!(board.get(0, y), Some(Cell::Wall));
            assert_eq!(board.get(11, y), Some(Cell::Wall));
        }
        for x in 0..FIELD_WIDTH as i8 {
            assert_eq!(board.get(x, 21), Some(Cell::Wall));
        }
        assert_eq!(board.filled_count(), 0);
        assert!(board.is_free(1, 0));
    }

    #[test]
    fn test_set_refuses_walls() {
        let mut board = Board::new();
        assert!(!board.set(0, 5, Cell::Empty));
        assert!(!board.set(5, 21, Cell::Piece(PieceKind::T)));
        assert!(!board.set(5, 5, Cell::Wall));
        assert_eq!(board.get(0, 5), Some(Cell::Wall));
        assert!(board.set(5, 5, Cell::Piece(PieceKind::T)));
    }

    #[test]
    fn test_remove_row_shifts_cells_down() {
        let mut board = Board::new();
        board.set(3, 0, Cell::Piece(PieceKind::O));
        board.set(3, 19, Cell::Piece(PieceKind::S));
        board.mark_row(20);
        board.remove_row(20);

        assert_eq!(board.get(3, 1), Some(Cell::Piece(PieceKind::O)));
        assert_eq!(board.get(3, 20), Some(Cell::Piece(PieceKind::S)));
        assert_eq!(board.get(3, 0), Some(Cell::Empty));
        assert_eq!(board.get(0, 20), Some(Cell::Wall));
        assert_eq!(board.get(3, 21), Some(Cell::Wall));
    }

    #[test]
    fn test_floor_row_is_never_complete() {
        let board = Board::new();
        assert!(!board.is_row_complete(21));
        assert!(!board.is_row_complete(-1));
    }
}
