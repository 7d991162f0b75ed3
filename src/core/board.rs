//! Grid module - the settled-cell occupancy map
//!
//! The grid is a 20x25 matrix of booleans where row 0 is the top row.
//! Uses a flat array for better cache locality and zero-allocation.
//! Cells are set only when a piece locks; they are never cleared while
//! a game is running.

use std::fmt;

use crate::types::{GRID_COLS, GRID_ROWS, OVERFLOW_ROW};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_COLS as usize) * (GRID_ROWS as usize);

/// Out-of-bounds grid query.
///
/// Direct `is_occupied` misuse is a caller bug and surfaces as this error;
/// the lock path clips instead (see `Grid::occupy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    pub row: i8,
    pub col: i8,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "grid query out of bounds: row {}, col {} (grid is {}x{})",
            self.row, self.col, GRID_ROWS, GRID_COLS
        )
    }
}

impl std::error::Error for OutOfBounds {}

/// The occupancy grid - 20 rows x 25 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [bool; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [false; GRID_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= GRID_ROWS as i8 || col < 0 || col >= GRID_COLS as i8 {
            return None;
        }
        Some((row as usize) * (GRID_COLS as usize) + (col as usize))
    }

    /// Number of rows
    pub fn rows(&self) -> u8 {
        GRID_ROWS
    }

    /// Number of columns
    pub fn cols(&self) -> u8 {
        GRID_COLS
    }

    /// Occupancy at (row, col), or `None` if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<bool> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Occupancy at (row, col); errors on an out-of-bounds query
    pub fn is_occupied(&self, row: i8, col: i8) -> Result<bool, OutOfBounds> {
        self.get(row, col).ok_or(OutOfBounds { row, col })
    }

    /// Mark a cell occupied.
    /// Out-of-bounds coordinates are ignored (the lock path clips to the
    /// grid); returns whether a cell was actually marked.
    pub fn occupy(&mut self, row: i8, col: i8) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = true;
                true
            }
            None => false,
        }
    }

    /// Game-over test: any occupied cell on the overflow row
    pub fn overflow_row_occupied(&self) -> bool {
        let start = (OVERFLOW_ROW as usize) * (GRID_COLS as usize);
        let end = start + GRID_COLS as usize;
        self.cells[start..end].iter().any(|&cell| cell)
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = false;
        }
    }

    /// Write occupancy into a 2D u8 matrix (for snapshots)
    pub fn write_u8_grid(&self, out: &mut [[u8; GRID_COLS as usize]; GRID_ROWS as usize]) {
        for row in 0..GRID_ROWS as usize {
            for col in 0..GRID_COLS as usize {
                out[row][col] = u8::from(self.cells[row * GRID_COLS as usize + col]);
            }
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(0, 24), Some(24));
        assert_eq!(Grid::index(1, 0), Some(25));
        assert_eq!(Grid::index(19, 24), Some(499));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(0, 25), None);
        assert_eq!(Grid::index(20, 0), None);
    }

    #[test]
    fn test_occupy_and_query() {
        let mut grid = Grid::new();

        assert_eq!(grid.is_occupied(5, 10), Ok(false));
        assert!(grid.occupy(5, 10));
        assert_eq!(grid.is_occupied(5, 10), Ok(true));
    }

    #[test]
    fn test_is_occupied_out_of_bounds_errors() {
        let grid = Grid::new();

        assert_eq!(
            grid.is_occupied(-1, 0),
            Err(OutOfBounds { row: -1, col: 0 })
        );
        assert_eq!(
            grid.is_occupied(0, GRID_COLS as i8),
            Err(OutOfBounds {
                row: 0,
                col: GRID_COLS as i8
            })
        );
    }

    #[test]
    fn test_occupy_out_of_bounds_is_ignored() {
        let mut grid = Grid::new();

        assert!(!grid.occupy(-1, 0));
        assert!(!grid.occupy(GRID_ROWS as i8, 0));
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_overflow_row_detection() {
        let mut grid = Grid::new();
        assert!(!grid.overflow_row_occupied());

        // Top row alone does not end the game
        grid.occupy(0, 3);
        assert!(!grid.overflow_row_occupied());

        grid.occupy(OVERFLOW_ROW as i8, 3);
        assert!(grid.overflow_row_occupied());

        grid.clear();
        assert!(!grid.overflow_row_occupied());
    }
}
