#![forbid(unsafe_code)]

//! Wheel data model: segments, wheels, and validation.
//!
//! A [`Segment`] is one weighted option on the wheel. Segments form an
//! ordered sequence inside a [`Wheel`]; order defines layout order (the
//! first segment starts at the pointer and spans proceed clockwise), but
//! order carries no weight of its own — selection probability depends only
//! on `weight / total_weight`.
//!
//! The engine assumes a validated wheel wherever segments are non-empty.
//! [`Wheel::validate`] is the helper for the layer that constructs wheels
//! (editors, importers, store backends); the engine itself never returns
//! validation errors, it degrades to "no result" instead.

use std::fmt;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::SpinConfig;

/// Fewest segments a stored wheel may have. A one-segment wheel still spins
/// and resolves, but the editing layer refuses to shrink below this.
pub const MIN_SEGMENTS: usize = 2;

/// Fallback segment colors, assigned by position when a segment has none.
pub const DEFAULT_PALETTE: [&str; 12] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40",
    "#7CFC00", "#FF6B6B", "#48D1CC", "#DDA0DD", "#F0E68C", "#87CEEB",
];

/// Opaque segment identifier, unique within a wheel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct SegmentId(String);

impl SegmentId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SegmentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SegmentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One weighted option on the wheel.
///
/// `weight` is relative, not normalized: a segment with weight 2 is twice as
/// likely as one with weight 1, whatever the rest of the wheel holds.
/// Zero, negative, and non-finite weights are invalid (see
/// [`Wheel::validate`]).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    id: SegmentId,
    label: String,
    color: String,
    weight: f64,
}

impl Segment {
    /// Create a segment with an explicit color and weight.
    #[must_use]
    pub fn new(
        id: impl Into<SegmentId>,
        label: impl Into<String>,
        color: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color: color.into(),
            weight,
        }
    }

    /// Create a unit-weight segment colored from [`DEFAULT_PALETTE`] by
    /// position.
    #[must_use]
    pub fn with_palette_color(
        id: impl Into<SegmentId>,
        label: impl Into<String>,
        position: usize,
    ) -> Self {
        Self::new(
            id,
            label,
            DEFAULT_PALETTE[position % DEFAULT_PALETTE.len()],
            1.0,
        )
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> &SegmentId {
        &self.id
    }

    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[inline]
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Replace the weight (builder pattern).
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

/// A named, ordered wheel definition as the host product stores it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wheel {
    pub id: String,
    pub name: String,
    pub segments: Vec<Segment>,
    pub config: SpinConfig,
}

impl Wheel {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            segments,
            config: SpinConfig::default(),
        }
    }

    /// Set the spin configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: SpinConfig) -> Self {
        self.config = config;
        self
    }

    /// Check the invariants the engine assumes of a non-empty wheel.
    ///
    /// Returns the first violation found, walking segments in order.
    pub fn validate(&self) -> Result<(), WheelError> {
        if self.segments.is_empty() {
            return Err(WheelError::Empty);
        }
        if self.segments.len() < MIN_SEGMENTS {
            return Err(WheelError::TooFewSegments(self.segments.len()));
        }
        let mut seen: Vec<&SegmentId> = Vec::with_capacity(self.segments.len());
        for (index, segment) in self.segments.iter().enumerate() {
            if segment.label.trim().is_empty() {
                return Err(WheelError::EmptyLabel { index });
            }
            if !segment.weight.is_finite() || segment.weight <= 0.0 {
                return Err(WheelError::InvalidWeight {
                    index,
                    weight: segment.weight,
                });
            }
            if seen.contains(&&segment.id) {
                return Err(WheelError::DuplicateId(segment.id.clone()));
            }
            seen.push(&segment.id);
        }
        Ok(())
    }
}

/// Violations reported by [`Wheel::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WheelError {
    #[error("wheel has no segments")]
    Empty,

    #[error("wheel needs at least {MIN_SEGMENTS} segments, got {0}")]
    TooFewSegments(usize),

    #[error("segment {index} has an empty label")]
    EmptyLabel { index: usize },

    #[error("segment {index} has invalid weight {weight} (must be positive and finite)")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("duplicate segment id `{0}`")]
    DuplicateId(SegmentId),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn two_segments() -> Vec<Segment> {
        vec![
            Segment::with_palette_color("a", "Option 1", 0),
            Segment::with_palette_color("b", "Option 2", 1),
        ]
    }

    #[test]
    fn palette_cycles_by_position() {
        let s = Segment::with_palette_color("x", "Late", DEFAULT_PALETTE.len() + 2);
        assert_eq!(s.color(), DEFAULT_PALETTE[2]);
        assert_eq!(s.weight(), 1.0);
    }

    #[test]
    fn validate_accepts_default_wheel() {
        let wheel = Wheel::new("w1", "My Wheel", two_segments());
        assert!(wheel.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty() {
        let wheel = Wheel::new("w1", "Empty", Vec::new());
        assert_eq!(wheel.validate(), Err(WheelError::Empty));
    }

    #[test]
    fn validate_rejects_single_segment() {
        let wheel = Wheel::new("w1", "Lonely", vec![Segment::with_palette_color("a", "Only", 0)]);
        assert_eq!(wheel.validate(), Err(WheelError::TooFewSegments(1)));
    }

    #[test]
    fn validate_rejects_zero_weight() {
        let mut segments = two_segments();
        segments[1] = segments[1].clone().with_weight(0.0);
        let wheel = Wheel::new("w1", "Weightless", segments);
        assert_eq!(
            wheel.validate(),
            Err(WheelError::InvalidWeight {
                index: 1,
                weight: 0.0
            })
        );
    }

    #[test]
    fn validate_rejects_nan_weight() {
        let mut segments = two_segments();
        segments[0] = segments[0].clone().with_weight(f64::NAN);
        let wheel = Wheel::new("w1", "NaN", segments);
        assert!(matches!(
            wheel.validate(),
            Err(WheelError::InvalidWeight { index: 0, .. })
        ));
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let segments = vec![
            Segment::with_palette_color("a", "One", 0),
            Segment::with_palette_color("a", "Two", 1),
        ];
        let wheel = Wheel::new("w1", "Dupes", segments);
        assert_eq!(
            wheel.validate(),
            Err(WheelError::DuplicateId(SegmentId::new("a")))
        );
    }

    #[test]
    fn validate_rejects_blank_label() {
        let segments = vec![
            Segment::with_palette_color("a", "  ", 0),
            Segment::with_palette_color("b", "Fine", 1),
        ];
        let wheel = Wheel::new("w1", "Blank", segments);
        assert_eq!(wheel.validate(), Err(WheelError::EmptyLabel { index: 0 }));
    }

    #[test]
    fn error_messages_name_the_segment() {
        let err = WheelError::InvalidWeight {
            index: 3,
            weight: -1.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("segment 3"), "got: {msg}");
        assert!(msg.contains("-1.5"), "got: {msg}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn wheel_round_trips_through_json() {
        let wheel = Wheel::new("w1", "My Wheel", two_segments());
        let json = serde_json::to_string(&wheel).unwrap();
        let back: Wheel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, wheel);
    }
}
