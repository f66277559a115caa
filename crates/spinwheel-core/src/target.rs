#![forbid(unsafe_code)]

//! Weighted target selection.
//!
//! Inverse-CDF sampling over the categorical distribution the weights
//! define: draw `r = u · Σweight`, walk cumulative weights, and take the
//! first segment whose cumulative sum reaches `r`. Over many draws each
//! segment is selected with probability exactly `weight_i / Σweight` (the
//! chi-square test below pins this).
//!
//! The landing offset is a presentation guarantee, not a probability one:
//! the pointer should visibly rest inside the winning slice, so the offset
//! is restricted to the middle 60% of the span rather than the full width.

use crate::layout::{layout, total_weight};
use crate::rng::UnitRandom;
use crate::segment::Segment;

/// Fraction of a span's width kept clear on each edge when landing.
const LANDING_MARGIN: f64 = 0.2;

/// A selected destination: which segment, and where inside it to land.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    /// Index of the destination segment in the wheel's sequence.
    pub index: usize,
    /// Landing offset in radians from the segment's start angle, strictly
    /// inside the span.
    pub landing: f64,
}

/// Pick a destination segment and a landing point inside it.
///
/// Consumes exactly two draws: the weighted pick, then the landing offset.
/// Returns `None` when the sequence is empty or the total weight is
/// unusable — the same inputs for which [`layout`] returns no spans.
#[must_use]
pub fn select_target(segments: &[Segment], rng: &mut impl UnitRandom) -> Option<Target> {
    let spans = layout(segments);
    let last = spans.len().checked_sub(1)?;
    let total = total_weight(segments);

    let r = rng.next_unit() * total;
    let mut cumulative = 0.0;
    let mut index = last;
    for (i, segment) in segments.iter().enumerate() {
        cumulative += segment.weight();
        // Closed upper bound on the last segment: float shortfall in the
        // cumulative sum must never leave a draw unassigned.
        if r <= cumulative {
            index = i;
            break;
        }
    }

    let width = spans[index].width();
    let landing = (LANDING_MARGIN + (1.0 - 2.0 * LANDING_MARGIN) * rng.next_unit()) * width;
    Some(Target { index, landing })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
