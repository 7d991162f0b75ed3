//! Events module - engine-to-presentation notifications
//!
//! The engine never touches a scene graph or terminal. It reports what
//! happened through an `EventSink`, and the presentation layer decides
//! how to show it. Events are serde-serializable so a consumer can also
//! sit on the far side of a process boundary.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::types::PieceKind;

/// Something the presentation layer may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    PieceSpawned { kind: PieceKind, col: i8, row: i8 },
    PieceMoved { col: i8, row: i8 },
    PieceLocked { kind: PieceKind, points: u32 },
    ScoreChanged { score: u32 },
    GameOver { score: u32 },
}

/// Receiver of engine events
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

/// Sink that discards everything (headless runs, benches)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

/// Sink that records events into a shared buffer.
///
/// Clones share the same buffer, so a test can hand one clone to the
/// engine and inspect the stream through another. Single-threaded by
/// design, like the engine itself.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Take and clear the recorded events
    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: GameEvent) {
        self.events.borrow_mut().push(event);
    }
}
