//! RNG module - pluggable shape selection
//!
//! Spawning draws kinds uniformly at random. The source is behind the
//! `ShapeSource` trait so tests can script exact piece sequences.
//!
//! The default source is a simple LCG for determinism under a seed.

use crate::types::PieceKind;

/// Supplier of the next piece kind to spawn
pub trait ShapeSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Uniform random shape selection backed by `SimpleRng`
#[derive(Debug, Clone)]
pub struct UniformShapes {
    rng: SimpleRng,
}

impl UniformShapes {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl ShapeSource for UniformShapes {
    fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }
}

/// Deterministic shape source for tests: yields a fixed sequence,
/// cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedShapes {
    sequence: Vec<PieceKind>,
    next: usize,
}

impl ScriptedShapes {
    pub fn new(sequence: Vec<PieceKind>) -> Self {
        assert!(!sequence.is_empty(), "scripted sequence must not be empty");
        Self { sequence, next: 0 }
    }

    /// A source that always yields the same kind
    pub fn repeating(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl ShapeSource for ScriptedShapes {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.sequence[self.next];
        self.next = (self.next + 1) % self.sequence.len();
        kind
    }
}
