//! Blockfall - rules engine for a falling-block puzzle game.
//!
//! The crate owns the game's real state and invariants: a fixed 20x25
//! occupancy grid, an active piece under gravity and player input,
//! collision and locking, flat per-kind scoring, and the overflow
//! game-over. Rendering, audio, and input devices are external
//! collaborators: they feed [`types::GameCommand`]s and elapsed time in,
//! and consume [`core::GameEvent`]s and [`core::GameSnapshot`]s out.

pub mod core;
pub mod types;
