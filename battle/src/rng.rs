//! Deterministic RNG for battle resolution
//!
//! This module provides a no_std compatible RNG trait and two implementations:
//! a seeded xorshift generator for canonical battles and a playback source that
//! repeats a recorded sequence of draws.

use alloc::vec::Vec;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

use crate::error::{BattleError, BattleResult};

/// Trait for random number generation in battles
pub trait BattleRng {
    /// Generate a float in [0, 1)
    fn next_f64(&mut self) -> f64;

    /// Generate an integer in [0, max_exclusive)
    ///
    /// Fails with [`BattleError::InvalidArgument`] when `max_exclusive` is zero.
    fn next_int(&mut self, max_exclusive: usize) -> BattleResult<usize> {
        if max_exclusive == 0 {
            return Err(BattleError::InvalidArgument { max_exclusive: 0 });
        }
        // Sources that hand back values outside [0, 1) are pulled into range.
        let index = (self.next_f64() * max_exclusive as f64) as usize;
        Ok(index.min(max_exclusive - 1))
    }
}

/// XorShift32 RNG - simple, fast, deterministic
///
/// This is suitable for game logic where cryptographic security is not needed.
/// The same seed will always produce the same sequence on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
pub struct XorShiftRng {
    state: u32,
}

impl XorShiftRng {
    /// Create a new RNG from a u64 seed
    ///
    /// Only the low 32 bits are kept, so `seed` and `seed + 2^32` share a stream.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::seed_from_u32(seed as u32)
    }

    /// Create a new RNG from a u32 seed
    ///
    /// A zero seed is kept as is and yields an all-zero stream.
    pub fn seed_from_u32(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl BattleRng for XorShiftRng {
    fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }
}

/// Plays back a recorded sequence of draws, wrapping around at the end.
///
/// Used to drive scripted battles in tests and to re-run a battle from draws
/// captured elsewhere. An empty sequence always yields `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceRng {
    values: Vec<f64>,
    index: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl BattleRng for SequenceRng {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let current = self.values[self.index % self.values.len()];
        self.index += 1;
        current
    }
}
