#![forbid(unsafe_code)]

//! Tick-driven spin animation.
//!
//! [`SpinDriver`] is a two-state machine, Idle ⇄ Spinning, reusable across
//! any number of spins. It performs no I/O, never blocks, and owns the
//! wheel's rotation state exclusively: progression happens only when the
//! host's frame source calls [`SpinDriver::tick`] with the current time.
//! Each tick either yields a [`SpinFrame`] for the renderer or finalizes
//! into a [`SpinResult`].
//!
//! # Invariants
//!
//! 1. At most one spin is in flight per driver. [`SpinDriver::spin`] while
//!    Spinning is a no-op returning `false` — rejected, never queued.
//! 2. Completion is keyed on elapsed wall-clock time crossing the
//!    configured duration, not on tick count, so dropped frames delay
//!    nothing and exactly one [`TickEvent::Finished`] is delivered per spin.
//! 3. The rotation accumulates unbounded while Spinning and is normalized
//!    into `[0, 2π)` only at rest (completion or [`SpinDriver::stop`]).
//! 4. The winner is re-derived from the final angle via [`resolve`], never
//!    taken from the planner's selection. What the pointer geometrically
//!    indicates is what the result declares.
//! 5. Overshoot easings may push eased progress outside `[0, 1]` mid-flight;
//!    frames carry the unclamped angle. Only the final committed angle is
//!    normalized.
//!
//! # Failure Modes
//!
//! - Empty segment sequence or unusable total weight: `spin()` returns
//!   `false` and stays Idle. Not an error (see the crate docs on degraded
//!   inputs).
//! - `stop()` while Idle: no-op.
//! - `tick()` while Idle: [`TickEvent::Idle`].

use std::f64::consts::TAU;

use tracing::{debug, trace};
use web_time::{Duration, Instant};

use crate::config::SpinConfig;
use crate::easing::Easing;
use crate::layout::total_weight;
use crate::plan::plan_rotation;
use crate::resolve::resolve;
use crate::rng::UnitRandom;
use crate::segment::Segment;
use crate::target::select_target;

/// One animation frame: the rotation to draw and how far along the spin is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinFrame {
    /// Absolute rotation in radians (unnormalized while in flight).
    pub angle: f64,
    /// Linear time progress in `[0, 1]` (pre-easing).
    pub progress: f64,
}

/// The outcome of a completed spin. Produced exactly once per spin.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinResult {
    /// The segment under the pointer at rest.
    pub segment: Segment,
    /// Final rotation, normalized into `[0, 2π)`.
    pub final_angle: f64,
    /// The configured duration the spin ran for.
    pub duration: Duration,
}

/// What one call to [`SpinDriver::tick`] produced.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// No spin in flight; nothing to do.
    Idle,
    /// Still spinning: a frame for the renderer.
    Frame(SpinFrame),
    /// The spin just completed; the driver is Idle again.
    Finished(SpinResult),
}

/// Everything frozen at spin start. The segment snapshot keeps mid-flight
/// wheel edits from changing what the spin resolves against.
#[derive(Debug)]
struct Flight {
    segments: Vec<Segment>,
    start_angle: f64,
    target_angle: f64,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

/// The spin animation state machine.
#[derive(Debug, Default)]
pub struct SpinDriver {
    rotation: f64,
    flight: Option<Flight>,
}

impl SpinDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current rotation in radians. Normalized while Idle; unbounded while
    /// Spinning.
    #[inline]
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[inline]
    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.flight.is_some()
    }

    /// Start a spin at time `now`.
    ///
    /// Draws three values from `rng` in order: weighted pick, landing
    /// offset, turn count. Returns `false` without touching any state when
    /// a spin is already in flight, the sequence is empty, or the total
    /// weight is unusable — all defined idle responses, not errors.
    pub fn spin(
        &mut self,
        segments: &[Segment],
        config: &SpinConfig,
        rng: &mut impl UnitRandom,
        now: Instant,
    ) -> bool {
        if self.flight.is_some() {
            trace!("spin rejected: already in flight");
            return false;
        }
        let total = total_weight(segments);
        if segments.is_empty() || !total.is_finite() || total <= 0.0 {
            debug!(total, "spin rejected: nothing to spin");
            return false;
        }

        let Some(target) = select_target(segments, rng) else {
            return false;
        };
        let target_angle = plan_rotation(self.rotation, segments, &target, config, rng);
        // A zero duration would make progress 0/0 on the first tick.
        let duration = config.duration.max(Duration::from_nanos(1));

        debug!(
            target_index = target.index,
            start_angle = self.rotation,
            target_angle,
            duration_ms = duration.as_millis() as u64,
            easing = %config.easing,
            "spin started"
        );

        self.flight = Some(Flight {
            segments: segments.to_vec(),
            start_angle: self.rotation,
            target_angle,
            started_at: now,
            duration,
            easing: config.easing,
        });
        true
    }

    /// Advance the animation to time `now`.
    ///
    /// Re-entrant and discrete: each call computes progress from elapsed
    /// time alone, so skipped or late ticks only coarsen the frame stream,
    /// never the outcome.
    pub fn tick(&mut self, now: Instant) -> TickEvent {
        let Some(flight) = &self.flight else {
            return TickEvent::Idle;
        };

        let elapsed = now.saturating_duration_since(flight.started_at);
        let progress = (elapsed.as_secs_f64() / flight.duration.as_secs_f64()).min(1.0);

        if progress < 1.0 {
            let eased = flight.easing.apply(progress);
            self.rotation =
                flight.start_angle + (flight.target_angle - flight.start_angle) * eased;
            trace!(angle = self.rotation, progress, "spin frame");
            return TickEvent::Frame(SpinFrame {
                angle: self.rotation,
                progress,
            });
        }

        self.finish()
    }

    /// Force the driver Idle without delivering a result.
    ///
    /// Synchronous and immediately observable: after `stop()` returns, no
    /// further frames or completions occur for the cancelled spin. The rest
    /// angle is normalized. No-op while Idle.
    pub fn stop(&mut self) {
        if self.flight.take().is_some() {
            self.rotation = self.rotation.rem_euclid(TAU);
            debug!(angle = self.rotation, "spin stopped");
        }
    }

    fn finish(&mut self) -> TickEvent {
        let Some(flight) = self.flight.take() else {
            return TickEvent::Idle;
        };
        self.rotation = flight.target_angle.rem_euclid(TAU);

        match resolve(&flight.segments, self.rotation) {
            Some(segment) => {
                debug!(
                    winner = %segment.label(),
                    final_angle = self.rotation,
                    "spin finished"
                );
                TickEvent::Finished(SpinResult {
                    segment: segment.clone(),
                    final_angle: self.rotation,
                    duration: flight.duration,
                })
            }
            // Unreachable for flights spin() accepted.
            None => TickEvent::Idle,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
