#![forbid(unsafe_code)]

//! Easing curves for the spin animation.
//!
//! All curves map linear time progress `t ∈ [0, 1]` to visual progress with
//! `apply(0) == 0` and `apply(1) == 1`. The plain ease-out family is
//! monotonic; the two overshoot curves ([`Easing::OutBack`],
//! [`Easing::OutElastic`]) transiently leave `[0, 1]` near the end of the
//! spin. That excursion is intentional visual behavior — the driver never
//! clamps eased progress mid-flight, only the final committed angle is
//! normalized.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Overshoot amplitude for [`Easing::OutBack`].
const BACK_C1: f64 = 1.70158;

/// The fixed set of easing curves a spin may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Easing {
    /// Constant speed. Looks mechanical; mostly useful for tests.
    Linear,
    /// Quadratic ease-out.
    OutQuad,
    /// Cubic ease-out. The product default.
    #[default]
    OutCubic,
    /// Quartic ease-out.
    OutQuart,
    /// Exponential ease-out.
    OutExpo,
    /// Overshoots the target slightly, then settles back.
    OutBack,
    /// Oscillates past the target with decaying amplitude.
    OutElastic,
}

impl Easing {
    /// Every curve, in display order.
    pub const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::OutQuad,
        Easing::OutCubic,
        Easing::OutQuart,
        Easing::OutExpo,
        Easing::OutBack,
        Easing::OutElastic,
    ];

    /// Map linear progress `t` to eased progress.
    ///
    /// Callers clamp `t` into `[0, 1]` first; the driver always does.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::OutQuad => t * (2.0 - t),
            Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::OutQuart => 1.0 - (1.0 - t).powi(4),
            Easing::OutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * t)
                }
            }
            Easing::OutBack => {
                let c3 = BACK_C1 + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + BACK_C1 * (t - 1.0).powi(2)
            }
            Easing::OutElastic => {
                if t <= 0.0 || t >= 1.0 {
                    t.clamp(0.0, 1.0)
                } else {
                    2.0_f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * (2.0 * PI / 3.0)).sin() + 1.0
                }
            }
        }
    }

    /// Whether this curve can transiently exceed 1.0 before settling.
    #[inline]
    #[must_use]
    pub const fn overshoots(self) -> bool {
        matches!(self, Easing::OutBack | Easing::OutElastic)
    }

    /// Stable kebab-case name, matching the serde representation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::OutQuad => "out-quad",
            Easing::OutCubic => "out-cubic",
            Easing::OutQuart => "out-quart",
            Easing::OutExpo => "out-expo",
            Easing::OutBack => "out-back",
            Easing::OutElastic => "out-elastic",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error from parsing an easing name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown easing `{0}` (expected one of: linear, out-quad, out-cubic, out-quart, out-expo, out-back, out-elastic)")]
pub struct ParseEasingError(String);

impl FromStr for Easing {
    type Err = ParseEasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| ParseEasingError(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_curves_hit_both_endpoints() {
        for easing in Easing::ALL {
            assert!(
                easing.apply(0.0).abs() < 1e-12,
                "{easing} should start at 0"
            );
            assert!(
                (easing.apply(1.0) - 1.0).abs() < 1e-12,
                "{easing} should end at 1"
            );
        }
    }

    #[test]
    fn plain_ease_outs_are_monotonic() {
        for easing in Easing::ALL.into_iter().filter(|e| !e.overshoots()) {
            let mut prev = 0.0;
            for i in 0..=1000 {
                let t = f64::from(i) / 1000.0;
                let v = easing.apply(t);
                assert!(v >= prev - 1e-12, "{easing} not monotonic at t={t}");
                prev = v;
            }
        }
    }

    #[test]
    fn plain_ease_outs_stay_in_unit_interval() {
        for easing in Easing::ALL.into_iter().filter(|e| !e.overshoots()) {
            for i in 0..=1000 {
                let t = f64::from(i) / 1000.0;
                let v = easing.apply(t);
                assert!((-1e-12..=1.0 + 1e-12).contains(&v), "{easing} at t={t}: {v}");
            }
        }
    }

    #[test]
    fn overshoot_curves_actually_overshoot() {
        for easing in [Easing::OutBack, Easing::OutElastic] {
            let max = (0..=1000)
                .map(|i| easing.apply(f64::from(i) / 1000.0))
                .fold(f64::MIN, f64::max);
            assert!(max > 1.0, "{easing} never exceeded 1.0 (max {max})");
        }
    }

    #[test]
    fn overshoot_excursion_is_bounded() {
        // Both curves stay well inside one extra half-turn of visual progress.
        for easing in [Easing::OutBack, Easing::OutElastic] {
            for i in 0..=1000 {
                let v = easing.apply(f64::from(i) / 1000.0);
                assert!((-0.5..=1.5).contains(&v), "{easing}: {v}");
            }
        }
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for easing in Easing::ALL {
            assert_eq!(easing.name().parse::<Easing>(), Ok(easing));
        }
        assert!("ease-out-bounce".parse::<Easing>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_kebab_case_names() {
        let json = serde_json::to_string(&Easing::OutElastic).unwrap();
        assert_eq!(json, "\"out-elastic\"");
        let back: Easing = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Easing::OutElastic);
    }
}
