//! Engine module - the game state machine
//!
//! Owns the grid, the active piece, the score, and the gravity timer.
//! Advances only in response to discrete calls (`handle_input`,
//! `advance_time`); each call runs to completion, including a cascading
//! lock-then-spawn, before the next is accepted.
//!
//! Coordinates: a piece position is (col, row) in a y-up frame. Spawn row
//! is the grid's top (`GRID_ROWS - 1`) and gravity decrements `row`. The
//! settled grid is y-down with row 0 on top, so a local cell (dx, dy) of
//! a piece at (col, row) lands on grid cell
//! `(GRID_ROWS - 1 - (row - dy), col + dx)`.

use std::fmt;

use log::{debug, info};

use crate::core::board::Grid;
use crate::core::events::{EventSink, GameEvent, NullSink};
use crate::core::pieces::{cells_of, get_shape, lock_points, rotate_cw, ShapeMatrix, SHAPE_SIZE};
use crate::core::rng::{ShapeSource, UniformShapes};
use crate::types::{
    GameCommand, InputOutcome, MoveOutcome, Phase, PieceKind, RotateOutcome, DROP_INTERVAL_MS,
    GRID_COLS, GRID_ROWS, SPAWN_COL, SPAWN_ROW,
};

/// Caller sequencing bug: an operation was invoked in a phase that cannot
/// accept it. These fail loudly rather than being absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// `move`/`rotate` with no active piece on the board.
    NoActivePiece,
    /// A gameplay operation while the engine is `Idle` or `Over`.
    NotRunning,
    /// `start` on an engine that already ran; restart means a fresh engine.
    AlreadyStarted,
}

impl EngineError {
    pub fn code(self) -> &'static str {
        match self {
            EngineError::NoActivePiece => "no_active_piece",
            EngineError::NotRunning => "not_running",
            EngineError::AlreadyStarted => "already_started",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            EngineError::NoActivePiece => "no active piece to move or rotate",
            EngineError::NotRunning => "operation requires a running game",
            EngineError::AlreadyStarted => "engine already started; build a fresh one to restart",
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for EngineError {}

/// The piece currently under player control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Live local cell matrix; rotation replaces it wholesale.
    pub cells: ShapeMatrix,
    pub col: i8,
    pub row: i8,
}

impl ActivePiece {
    /// Create a piece of the given kind at the spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            cells: get_shape(kind),
            col: SPAWN_COL,
            row: SPAWN_ROW,
        }
    }
}

/// The rules engine: grid + active piece + score + gravity timer
pub struct GameEngine {
    grid: Grid,
    active: Option<ActivePiece>,
    score: u32,
    phase: Phase,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
    shapes: Box<dyn ShapeSource>,
    events: Box<dyn EventSink>,
}

impl GameEngine {
    /// Create an idle engine with uniform random shape selection and no
    /// event consumer
    pub fn new(seed: u32) -> Self {
        Self {
            grid: Grid::new(),
            active: None,
            score: 0,
            phase: Phase::Idle,
            drop_interval_ms: DROP_INTERVAL_MS,
            drop_timer_ms: 0,
            shapes: Box::new(UniformShapes::new(seed)),
            events: Box::new(NullSink),
        }
    }

    /// Replace the shape source (deterministic tests)
    pub fn with_shape_source(mut self, shapes: Box<dyn ShapeSource>) -> Self {
        self.shapes = shapes;
        self
    }

    /// Replace the event sink
    pub fn with_event_sink(mut self, events: Box<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Write the current state into a reusable snapshot buffer
    pub fn snapshot_into(&self, out: &mut crate::core::snapshot::GameSnapshot) {
        use crate::core::snapshot::ActiveSnapshot;

        self.grid.write_u8_grid(&mut out.grid);
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.phase = self.phase;
    }

    /// Allocate and fill a fresh snapshot
    pub fn snapshot(&self) -> crate::core::snapshot::GameSnapshot {
        let mut s = crate::core::snapshot::GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Reset score and grid, enter `Running`, spawn the first piece.
    ///
    /// Valid only from `Idle`: a finished engine is replaced, not revived.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.phase != Phase::Idle {
            return Err(EngineError::AlreadyStarted);
        }
        self.grid.clear();
        self.score = 0;
        self.drop_timer_ms = 0;
        self.phase = Phase::Running;
        self.spawn();
        Ok(())
    }

    /// Apply a player command
    pub fn handle_input(&mut self, command: GameCommand) -> Result<InputOutcome, EngineError> {
        match command {
            GameCommand::StartIfIdle => {
                if self.phase == Phase::Idle {
                    self.start()?;
                    Ok(InputOutcome::Started)
                } else {
                    Ok(InputOutcome::Ignored)
                }
            }
            GameCommand::MoveLeft => self.move_piece(-1, 0).map(Into::into),
            GameCommand::MoveRight => self.move_piece(1, 0).map(Into::into),
            GameCommand::SoftDrop => self.move_piece(0, -1).map(Into::into),
            GameCommand::Rotate => self.rotate().map(Into::into),
        }
    }

    /// Drive automatic gravity. Accumulates elapsed time and steps the
    /// piece one cell down each time the drop interval is reached; the
    /// accumulator resets to zero on a step. No-op unless `Running`.
    /// Returns whether a gravity step ran.
    pub fn advance_time(&mut self, elapsed_ms: u32) -> Result<bool, EngineError> {
        if self.phase != Phase::Running {
            return Ok(false);
        }
        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms < self.drop_interval_ms {
            return Ok(false);
        }
        self.drop_timer_ms = 0;
        self.move_piece(0, -1)?;
        Ok(true)
    }

    /// Try to move the active piece by (d_col, d_row).
    ///
    /// A colliding downward move locks the piece; a colliding sideways
    /// move is rejected with the position unchanged.
    pub fn move_piece(&mut self, d_col: i8, d_row: i8) -> Result<MoveOutcome, EngineError> {
        if self.phase != Phase::Running {
            return Err(EngineError::NotRunning);
        }
        let active = self.active.ok_or(EngineError::NoActivePiece)?;

        let col = active.col + d_col;
        let row = active.row + d_row;

        if !self.collides(&active.cells, col, row) {
            self.active = Some(ActivePiece { col, row, ..active });
            self.events.emit(GameEvent::PieceMoved { col, row });
            return Ok(MoveOutcome::Moved);
        }

        if d_row < 0 {
            self.lock_active();
            return Ok(MoveOutcome::Locked);
        }

        Ok(MoveOutcome::Blocked)
    }

    /// Try to rotate the active piece 90 degrees clockwise in place.
    ///
    /// The rotated matrix is checked at the current position; if it
    /// collides the rotation is dropped entirely (no kick offsets).
    pub fn rotate(&mut self) -> Result<RotateOutcome, EngineError> {
        if self.phase != Phase::Running {
            return Err(EngineError::NotRunning);
        }
        let active = self.active.ok_or(EngineError::NoActivePiece)?;

        let rotated = rotate_cw(&active.cells);
        if self.collides(&rotated, active.col, active.row) {
            return Ok(RotateOutcome::RotationBlocked);
        }

        self.active = Some(ActivePiece {
            cells: rotated,
            ..active
        });
        Ok(RotateOutcome::Rotated)
    }

    /// Collision test for a cell layout at a candidate (col, row).
    ///
    /// The horizontal clip uses the full 3x3 frame width rather than the
    /// occupied span; inherited behavior, kept as is.
    fn collides(&self, cells: &ShapeMatrix, col: i8, row: i8) -> bool {
        if col < 0 || col as i16 + SHAPE_SIZE as i16 > GRID_COLS as i16 {
            return true;
        }

        for (dx, dy) in cells_of(cells) {
            let world_row = GRID_ROWS as i8 - 1 - (row - dy);
            let world_col = col + dx;
            if world_row < 0 || world_row >= GRID_ROWS as i8 {
                return true;
            }
            if self.grid.get(world_row, world_col).unwrap_or(false) {
                return true;
            }
        }

        false
    }

    /// Transfer the active piece into the grid and either end the game or
    /// award points and spawn the next piece.
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        for (dx, dy) in cells_of(&active.cells) {
            let world_row = GRID_ROWS as i8 - 1 - (active.row - dy);
            let world_col = active.col + dx;
            // Clips silently at the edges
            self.grid.occupy(world_row, world_col);
        }

        if self.grid.overflow_row_occupied() {
            // The terminal piece awards nothing
            self.phase = Phase::Over;
            info!("game over, final score {}", self.score);
            self.events.emit(GameEvent::GameOver { score: self.score });
            return;
        }

        let points = lock_points(active.kind);
        self.score = self.score.saturating_add(points);
        debug!(
            "locked {} for {} points, score {}",
            active.kind.as_str(),
            points,
            self.score
        );
        self.events.emit(GameEvent::PieceLocked {
            kind: active.kind,
            points,
        });
        self.events.emit(GameEvent::ScoreChanged { score: self.score });
        self.spawn();
    }

    /// Spawn a fresh piece at the spawn position, discarding any prior
    /// active piece. No collision check happens here: a spawn into a
    /// near-full board simply collides on its next move.
    fn spawn(&mut self) {
        let kind = self.shapes.next_kind();
        let piece = ActivePiece::new(kind);
        self.active = Some(piece);
        self.events.emit(GameEvent::PieceSpawned {
            kind,
            col: piece.col,
            row: piece.row,
        });
    }
}

impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("active", &self.active)
            .field("drop_timer_ms", &self.drop_timer_ms)
            .finish_non_exhaustive()
    }
}
