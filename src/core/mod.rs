//! Core module - pure game rules with no I/O dependencies
//!
//! Everything here is deterministic given a shape source: the grid, the
//! piece geometry, the engine state machine, and the event/snapshot
//! surfaces the presentation layer consumes.

pub mod board;
pub mod engine;
pub mod events;
pub mod pieces;
pub mod rng;
pub mod snapshot;

// Re-export commonly used types
pub use board::{Grid, OutOfBounds};
pub use engine::{ActivePiece, EngineError, GameEngine};
pub use events::{EventLog, EventSink, GameEvent, NullSink};
pub use pieces::{cells_of, get_shape, lock_points, render_color, rotate_cw, ShapeMatrix};
pub use rng::{ScriptedShapes, ShapeSource, SimpleRng, UniformShapes};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
