#![forbid(unsafe_code)]

//! Rotation planning: a selected target → a final absolute rotation.
//!
//! The settled rotation `r` must park the target's landing angle under the
//! pointer, which by the engine's convention means
//! `r ≡ POINTER_ANGLE − landing_abs (mod 2π)`. On top of that alignment the
//! plan adds `turns` full revolutions for visual effect, and the fractional
//! part is normalized into `[0, 2π)` **forward** of the current angle — the
//! wheel only ever rotates in one direction within a spin.

use std::f64::consts::TAU;

use crate::config::SpinConfig;
use crate::layout::{POINTER_ANGLE, layout};
use crate::rng::UnitRandom;
use crate::segment::Segment;
use crate::target::Target;

/// Compute the absolute rotation at which `target` rests under the pointer.
///
/// Consumes exactly one draw (the turn count, uniform in
/// `[min_turns, max_turns]`). The result is always at least
/// `current + min_turns · 2π` and strictly less than
/// `current + (max_turns + 1) · 2π`.
///
/// Degenerate inputs (no spans for the sequence, or a target index past the
/// end) plan no movement and return `current`.
#[must_use]
pub fn plan_rotation(
    current: f64,
    segments: &[Segment],
    target: &Target,
    config: &SpinConfig,
    rng: &mut impl UnitRandom,
) -> f64 {
    let spans = layout(segments);
    let Some(span) = spans.get(target.index) else {
        return current;
    };

    let min_turns = config.min_turns.max(0.0);
    let max_turns = config.max_turns.max(min_turns);
    let turns = min_turns + rng.next_unit() * (max_turns - min_turns);

    let landing_abs = span.start + target.landing;
    let alignment = (POINTER_ANGLE - landing_abs - current).rem_euclid(TAU);

    current + turns * TAU + alignment
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
