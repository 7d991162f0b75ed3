//! Read-only state snapshots for the presentation layer
//!
//! A snapshot is a plain copy of everything a renderer needs: settled
//! occupancy, the active piece with its live cell matrix, score, and
//! phase. Serializable so it can cross a process boundary unchanged.

use serde::{Deserialize, Serialize};

use crate::core::engine::ActivePiece;
use crate::core::pieces::ShapeMatrix;
use crate::types::{Phase, PieceKind, GRID_COLS, GRID_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub cells: ShapeMatrix,
    pub col: i8,
    pub row: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            cells: value.cells,
            col: value.col,
            row: value.row,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Settled occupancy, row 0 on top, 1 = occupied
    pub grid: [[u8; GRID_COLS as usize]; GRID_ROWS as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[0u8; GRID_COLS as usize]; GRID_ROWS as usize];
        self.active = None;
        self.score = 0;
        self.phase = Phase::Idle;
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u8; GRID_COLS as usize]; GRID_ROWS as usize],
            active: None,
            score: 0,
            phase: Phase::Idle,
        }
    }
}
