//! Core types shared across the crate
//! This module contains pure data types with no I/O dependencies

use serde::{Deserialize, Serialize};

/// Grid dimensions (row 0 is the top row)
pub const GRID_COLS: u8 = 25;
pub const GRID_ROWS: u8 = 20;

/// Fixed gravity period (milliseconds)
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Spawn position for new pieces
pub const SPAWN_COL: i8 = (GRID_COLS / 2) as i8 - 1;
pub const SPAWN_ROW: i8 = GRID_ROWS as i8 - 1;

/// The row whose occupancy ends the game.
/// Row 1 (one below the ceiling), inherited behavior.
pub const OVERFLOW_ROW: u8 = 1;

/// Piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in spawn-lottery order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Engine lifecycle phase.
///
/// `Over` is terminal: a restart means constructing a fresh engine,
/// not transitioning back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Running,
    Over,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Over => "over",
        }
    }
}

/// Player commands accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    StartIfIdle,
}

impl GameCommand {
    /// Parse command from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "softdrop" => Some(GameCommand::SoftDrop),
            "rotate" => Some(GameCommand::Rotate),
            "startifidle" => Some(GameCommand::StartIfIdle),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::Rotate => "rotate",
            GameCommand::StartIfIdle => "startIfIdle",
        }
    }
}

/// Result of a move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Candidate position was free; the piece moved.
    Moved,
    /// Candidate position collides on a sideways move; position unchanged.
    Blocked,
    /// Candidate position collides on a downward move; the piece locked.
    Locked,
}

/// Result of a rotation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateOutcome {
    Rotated,
    /// Rotated layout collides in place; layout reverted.
    RotationBlocked,
}

/// Result of feeding a command through `handle_input`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Moved,
    Blocked,
    Locked,
    Rotated,
    RotationBlocked,
    Started,
    /// Command did not apply in the current phase (e.g. `StartIfIdle`
    /// while already running).
    Ignored,
}

impl From<MoveOutcome> for InputOutcome {
    fn from(value: MoveOutcome) -> Self {
        match value {
            MoveOutcome::Moved => InputOutcome::Moved,
            MoveOutcome::Blocked => InputOutcome::Blocked,
            MoveOutcome::Locked => InputOutcome::Locked,
        }
    }
}

impl From<RotateOutcome> for InputOutcome {
    fn from(value: RotateOutcome) -> Self {
        match value {
            RotateOutcome::Rotated => InputOutcome::Rotated,
            RotateOutcome::RotationBlocked => InputOutcome::RotationBlocked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_kind_string_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(PieceKind::from_str("o"), None);
        assert_eq!(PieceKind::from_str("x"), None);
    }

    #[test]
    fn test_command_string_roundtrip() {
        for cmd in [
            GameCommand::MoveLeft,
            GameCommand::MoveRight,
            GameCommand::SoftDrop,
            GameCommand::Rotate,
            GameCommand::StartIfIdle,
        ] {
            assert_eq!(GameCommand::from_str(cmd.as_str()), Some(cmd));
        }
    }

    #[test]
    fn test_spawn_position_constants() {
        assert_eq!(SPAWN_COL, 11);
        assert_eq!(SPAWN_ROW, 19);
    }
}
