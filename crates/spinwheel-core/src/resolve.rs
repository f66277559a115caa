#![forbid(unsafe_code)]

//! Angle resolution: a settled rotation → the segment under the pointer.
//!
//! The exact inverse of [`crate::layout`] under the engine's single angle
//! convention: a rotation `r` puts wheel-local angle
//! `(POINTER_ANGLE − r) mod 2π` under the pointer, and that probe angle is
//! walked against the same spans `layout()` produced. There is no second
//! formula to drift out of sync with the forward construction.
//!
//! Boundary angles resolve deterministically: spans are half-open, so a
//! probe exactly on a boundary belongs to the later span, and a probe that
//! float-rounds to `2π` itself belongs to the last span (closed upper
//! bound).

use std::f64::consts::TAU;

use crate::layout::{POINTER_ANGLE, layout};
use crate::segment::Segment;

/// Index of the segment under the pointer at rotation `rotation`.
///
/// `rotation` is the wheel's settled angle in radians; any real value is
/// accepted and reduced mod `2π`. Returns `None` for sequences [`layout`]
/// cannot lay out (empty, or unusable total weight).
#[must_use]
pub fn resolve_index(segments: &[Segment], rotation: f64) -> Option<usize> {
    let spans = layout(segments);
    if spans.is_empty() {
        return None;
    }

    let probe = (POINTER_ANGLE - rotation).rem_euclid(TAU);
    spans
        .iter()
        .find(|span| probe < span.end)
        .map(|span| span.index)
        // rem_euclid can round a tiny negative input up to 2π itself; the
        // last span owns that value.
        .or(Some(spans.len() - 1))
}

/// The segment under the pointer at rotation `rotation`.
#[must_use]
pub fn resolve(segments: &[Segment], rotation: f64) -> Option<&Segment> {
    resolve_index(segments, rotation).and_then(|index| segments.get(index))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(weights: &[f64]) -> Vec<Segment> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                Segment::with_palette_color(format!("s{i}"), format!("S{i}"), i).with_weight(w)
            })
            .collect()
    }

    #[test]
    fn empty_sequence_resolves_to_nothing() {
        assert_eq!(resolve(&[], 1.0), None);
    }

    #[test]
    fn zero_total_weight_resolves_to_nothing() {
        assert_eq!(resolve(&segments(&[0.0, 0.0]), 1.0), None);
    }

    #[test]
    fn zero_rotation_points_at_the_first_segment() {
        let segs = segments(&[1.0, 1.0, 1.0]);
        assert_eq!(resolve_index(&segs, 0.0), Some(0));
    }

    #[test]
    fn quarter_turn_shifts_the_winner_backward_through_the_sequence() {
        // Four equal segments. Rotating the wheel a quarter turn clockwise
        // drags the previous segment's span under the pointer.
        let segs = segments(&[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(resolve_index(&segs, TAU / 4.0), Some(3));
        assert_eq!(resolve_index(&segs, TAU / 2.0), Some(2));
        assert_eq!(resolve_index(&segs, 3.0 * TAU / 4.0), Some(1));
    }

    #[test]
    fn rotation_is_reduced_mod_tau() {
        let segs = segments(&[1.0, 2.0, 1.0]);
        for base in [0.3, 1.9, 4.4] {
            let at_base = resolve_index(&segs, base);
            assert_eq!(resolve_index(&segs, base + TAU), at_base);
            assert_eq!(resolve_index(&segs, base - 3.0 * TAU), at_base);
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        let segs = segments(&[2.0, 1.0, 0.5]);
        for i in 0..64 {
            let rotation = f64::from(i) * TAU / 64.0;
            assert_eq!(resolve_index(&segs, rotation), resolve_index(&segs, rotation));
        }
    }

    #[test]
    fn boundary_probe_belongs_to_the_later_span() {
        // probe == π is the boundary between the two spans; the half-open
        // convention hands it to segment 1. A probe of π comes from a
        // rotation of −π ≡ π.
        let segs = segments(&[1.0, 1.0]);
        assert_eq!(resolve_index(&segs, std::f64::consts::PI), Some(1));
    }

    #[test]
    fn probe_that_rounds_to_tau_takes_the_last_segment() {
        // (0 − ε) mod 2π rounds to 2π exactly for tiny ε; the closed upper
        // bound hands it to the last segment rather than dropping the spin.
        let segs = segments(&[1.0, 1.0, 1.0]);
        assert_eq!(resolve_index(&segs, 1e-18), Some(2));
    }

    #[test]
    fn single_segment_wins_at_every_angle() {
        let segs = segments(&[5.0]);
        for i in 0..32 {
            let rotation = f64::from(i) * TAU / 32.0;
            assert_eq!(resolve_index(&segs, rotation), Some(0));
        }
    }
}
