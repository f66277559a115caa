#![forbid(unsafe_code)]

//! Segment layout: weights → angular spans around the circle.
//!
//! One angle convention rules the whole engine. The pointer sits at
//! [`POINTER_ANGLE`] (the top of the circle) and never moves; the wheel
//! rotates under it, clockwise-positive. Segment spans are measured
//! clockwise from the pointer: the first segment starts at wheel-local angle
//! 0, and span `i` covers `(weight_i / Σweight) · 2π`, cumulative in
//! sequence order. The planner ([`crate::plan`]) and the resolver
//! ([`crate::resolve`]) both derive their formulas from this convention and
//! nothing else.
//!
//! # Invariants
//!
//! 1. Spans are contiguous: `spans[i + 1].start == spans[i].end` exactly
//!    (each boundary is the same cumulative value, not a re-sum).
//! 2. Spans partition the circle: `spans[0].start == 0.0` and the last
//!    `end` is exactly `2π` (`end = 2π · cum/total` with `cum == total` on
//!    the final segment).
//! 3. `layout()` is pure and deterministic for a given sequence.
//!
//! # Failure Modes
//!
//! - Empty segment sequence → empty layout; callers treat this as "no
//!   result possible".
//! - Non-positive or non-finite total weight → empty layout. The engine
//!   never divides by a zero total.

use std::f64::consts::TAU;

use crate::segment::Segment;

/// Fixed angle of the pointer: the top of the circle, where spans begin.
///
/// Every forward and inverse angle computation in the engine offsets from
/// this one constant.
pub const POINTER_ANGLE: f64 = 0.0;

/// The angular interval assigned to one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSpan {
    /// Position of the segment in the wheel's sequence.
    pub index: usize,
    /// Start angle in radians, inclusive, clockwise from the pointer.
    pub start: f64,
    /// End angle in radians, exclusive (closed at `2π` for the last span).
    pub end: f64,
}

impl SegmentSpan {
    /// Angular width of the span.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Whether a wheel-local angle falls inside the half-open span.
    #[inline]
    #[must_use]
    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.start && angle < self.end
    }

    /// Center of the span.
    #[inline]
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.start + self.width() / 2.0
    }
}

/// Sum of the segment weights.
#[must_use]
pub fn total_weight(segments: &[Segment]) -> f64 {
    segments.iter().map(Segment::weight).sum()
}

/// Lay the segments out around the circle.
///
/// Returns one span per segment in sequence order, or an empty vector when
/// the sequence is empty or the total weight is unusable.
///
/// Boundaries are computed as `2π · cumulative/total` rather than by adding
/// widths, so the final boundary lands on `2π` exactly and float drift
/// cannot open a gap between neighbors.
#[must_use]
pub fn layout(segments: &[Segment]) -> Vec<SegmentSpan> {
    let total = total_weight(segments);
    if segments.is_empty() || !total.is_finite() || total <= 0.0 {
        return Vec::new();
    }

    let mut spans = Vec::with_capacity(segments.len());
    let mut cumulative = 0.0;
    let mut start = 0.0;
    for (index, segment) in segments.iter().enumerate() {
        cumulative += segment.weight();
        let end = TAU * (cumulative / total);
        spans.push(SegmentSpan { index, start, end });
        start = end;
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
