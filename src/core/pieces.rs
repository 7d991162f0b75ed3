//! Pieces module - shape matrices and rotation
//!
//! Every kind lives in a 3x3 local frame stored as an explicit 0/1 matrix.
//! Rotation transforms the matrix itself; there is no separate rotation
//! index and no wall-kick table. Cell enumeration is row-major and the
//! lock path relies on that order.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Side length of the local shape frame
pub const SHAPE_SIZE: usize = 3;

/// A piece's local cell matrix (`1` = occupied)
pub type ShapeMatrix = [[u8; SHAPE_SIZE]; SHAPE_SIZE];

/// Local coordinates of one occupied cell, as (col, row)
pub type LocalCell = (i8, i8);

/// Occupied cells of a shape, in row-major scan order
pub type ShapeCells = ArrayVec<LocalCell, { SHAPE_SIZE * SHAPE_SIZE }>;

/// Get the spawn-orientation matrix for a piece kind
pub fn get_shape(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => [[1, 1, 1], [0, 0, 0], [0, 0, 0]],
        PieceKind::T => [[0, 1, 0], [1, 1, 1], [0, 0, 0]],
        PieceKind::S => [[0, 1, 1], [1, 1, 0], [0, 0, 0]],
        PieceKind::Z => [[1, 1, 0], [0, 1, 1], [0, 0, 0]],
        PieceKind::J => [[1, 0, 0], [1, 1, 1], [0, 0, 0]],
        PieceKind::L => [[0, 0, 1], [1, 1, 1], [0, 0, 0]],
    }
}

/// Points awarded when a piece of this kind locks
pub fn lock_points(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::I => 40,
        PieceKind::T => 60,
        PieceKind::S => 80,
        PieceKind::Z => 80,
        PieceKind::J => 60,
        PieceKind::L => 60,
    }
}

/// Render color for a piece kind (0xRRGGBB)
pub fn render_color(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::I => 0x00ffff,
        PieceKind::T => 0xe3891b,
        PieceKind::S => 0x00ff00,
        PieceKind::Z => 0xff0000,
        PieceKind::J => 0x0000ff,
        PieceKind::L => 0x7011be,
    }
}

/// Rotate a shape matrix 90 degrees clockwise:
/// `rotated[j][N-1-i] = matrix[i][j]`
pub fn rotate_cw(matrix: &ShapeMatrix) -> ShapeMatrix {
    let mut rotated = [[0u8; SHAPE_SIZE]; SHAPE_SIZE];
    for (i, row) in matrix.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            rotated[j][SHAPE_SIZE - 1 - i] = value;
        }
    }
    rotated
}

/// Enumerate the set cells of a matrix as (col, row) pairs.
///
/// Row-major order is part of the contract: world coordinates are
/// re-derived positionally from this enumeration when a piece locks.
pub fn cells_of(matrix: &ShapeMatrix) -> ShapeCells {
    let mut cells = ShapeCells::new();
    for (i, row) in matrix.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            if value != 0 {
                cells.push((j as i8, i as i8));
            }
        }
    }
    cells
}
