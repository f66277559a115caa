#![forbid(unsafe_code)]

//! Injected randomness.
//!
//! The engine never reaches for ambient entropy. Everything random — the
//! weighted pick, the landing offset, the turn count — flows through
//! [`UnitRandom`], a uniform `[0, 1)` draw source supplied by the caller.
//! The stock [`rand`] generators implement it directly; [`ScriptedRng`]
//! replays a fixed sequence for deterministic tests and replays.

use rand::rngs::{SmallRng, StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A uniform draw source over `[0, 1)`.
pub trait UnitRandom {
    /// Next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl UnitRandom for SmallRng {
    fn next_unit(&mut self) -> f64 {
        self.random()
    }
}

impl UnitRandom for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.random()
    }
}

impl UnitRandom for ThreadRng {
    fn next_unit(&mut self) -> f64 {
        self.random()
    }
}

/// A cheap seedable generator for live spins.
#[must_use]
pub fn small_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Replays a fixed script of draws, wrapping around when exhausted.
///
/// An empty script yields `0.0` forever. Script values are returned as
/// given; callers are expected to script values in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    script: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    #[must_use]
    pub fn new(script: impl Into<Vec<f64>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// How many draws have been taken so far.
    #[inline]
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UnitRandom for ScriptedRng {
    fn next_unit(&mut self) -> f64 {
        if self.script.is_empty() {
            return 0.0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value
    }
}
