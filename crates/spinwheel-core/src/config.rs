#![forbid(unsafe_code)]

//! Spin configuration.

use web_time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// Parameters for one spin: how long it runs, how many full revolutions it
/// adds for effect, and which easing curve shapes the deceleration.
///
/// A config is plain data. It is read once when a spin starts and never
/// consulted again mid-flight, so mutating it between spins is safe. The
/// driver clamps a zero duration up to 1 ns and swaps `min_turns`/`max_turns`
/// ordering problems away at spin time, so a hand-edited config cannot stall
/// the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpinConfig {
    /// Total animation duration. Default: 5 s.
    pub duration: Duration,
    /// Fewest full revolutions added before landing. Default: 5.
    pub min_turns: f64,
    /// Most full revolutions added before landing. Default: 10.
    pub max_turns: f64,
    /// Easing curve. Default: [`Easing::OutCubic`].
    pub easing: Easing,
}

impl SpinConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration (builder pattern).
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the turn range (builder pattern). `min` is floored at 0 and `max`
    /// at `min`.
    #[must_use]
    pub fn with_turns(mut self, min: f64, max: f64) -> Self {
        self.min_turns = min.max(0.0);
        self.max_turns = max.max(self.min_turns);
        self
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(5000),
            min_turns: 5.0,
            max_turns: 10.0,
            easing: Easing::OutCubic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_product_settings() {
        let config = SpinConfig::default();
        assert_eq!(config.duration, Duration::from_millis(5000));
        assert_eq!(config.min_turns, 5.0);
        assert_eq!(config.max_turns, 10.0);
        assert_eq!(config.easing, Easing::OutCubic);
    }

    #[test]
    fn with_turns_floors_min_at_zero() {
        let config = SpinConfig::new().with_turns(-2.0, 3.0);
        assert_eq!(config.min_turns, 0.0);
        assert_eq!(config.max_turns, 3.0);
    }

    #[test]
    fn with_turns_raises_max_to_min() {
        let config = SpinConfig::new().with_turns(4.0, 1.0);
        assert_eq!(config.min_turns, 4.0);
        assert_eq!(config.max_turns, 4.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_round_trips_through_json() {
        let config = SpinConfig::new()
            .with_duration(Duration::from_millis(1200))
            .with_turns(2.0, 4.0)
            .with_easing(Easing::OutElastic);
        let json = serde_json::to_string(&config).unwrap();
        let back: SpinConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
