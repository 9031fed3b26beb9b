//! RNG module - injectable randomness for piece selection
//!
//! Pieces are drawn independently and uniformly (no bag). The engine only
//! sees the [`RandomSource`] trait, so tests and automated players can swap in
//! a deterministic stream.

use crate::types::PieceKind;

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Value in `[0, max)`. `max` is never 0.
    fn next_range(&mut self, max: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
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
        // (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // Multiply-shift uses the high bits; the low bits of an LCG are weak.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of piece kinds, wrapping around at the end.
///
/// Only meaningful for piece selection: `next_range(7)` yields the index of
/// the next scripted kind in [`PieceKind::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedRng {
    kinds: Vec<PieceKind>,
    cursor: usize,
}

impl ScriptedRng {
    /// # Panics
    ///
    /// If `kinds` is empty.
    pub fn new(kinds: Vec<PieceKind>) -> Self {
        assert!(!kinds.is_empty(), "scripted piece list must not be empty");
        Self { kinds, cursor: 0 }
    }

    /// Always the same kind.
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }

    /// Kinds drawn so far
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_range(&mut self, max: u32) -> u32 {
        let kind = self.kinds[self.cursor % self.kinds.len()];
        self.cursor += 1;
        (kind.tag() as u32 - 1) % max
    }
}
