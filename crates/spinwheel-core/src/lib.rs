#![forbid(unsafe_code)]

//! Spin resolution engine for weighted wheels.
//!
//! # Role
//! `spinwheel-core` owns everything between "here is a wheel and a spin
//! request" and "here is the winner": segment geometry, weighted target
//! selection, rotation planning, the tick-driven animation, and the inverse
//! mapping from a settled angle back to a segment. It performs no I/O and
//! knows nothing about accounts, storage, or rendering.
//!
//! # Primary responsibilities
//! - **Layout** ([`layout`]): weights → contiguous angular spans
//!   partitioning the circle, measured clockwise from the fixed pointer.
//! - **Selection** ([`select_target`]): inverse-CDF pick proportional to
//!   weight, plus a landing point inside the winning span.
//! - **Planning** ([`plan_rotation`]): selection → a forward-only absolute
//!   target rotation with full turns added for effect.
//! - **Animation** ([`SpinDriver`]): Idle ⇄ Spinning state machine driven
//!   by host ticks, emitting frames and exactly one result per spin.
//! - **Resolution** ([`resolve`]): the settled angle → the segment under
//!   the pointer, re-derived geometrically rather than trusted from the
//!   planner.
//!
//! # How it fits in the system
//! The host product supplies segment sequences and spin configs (its wheel
//! CRUD lives behind [`store::WheelStore`]), drives [`SpinDriver::tick`]
//! from its frame source, renders the emitted angles, and records delivered
//! results through [`store::SpinLedger`]. Randomness is injected via
//! [`UnitRandom`], so every behavior in this crate is reproducible from a
//! seed.
//!
//! Abnormal inputs never raise errors here: an empty wheel, a zero total
//! weight, or a re-entrant spin all degrade to defined idle/no-result
//! behavior, per the engine's contract with its callers.

pub mod config;
pub mod driver;
pub mod easing;
pub mod layout;
pub mod plan;
pub mod resolve;
pub mod rng;
pub mod segment;
pub mod store;
pub mod target;

pub use config::SpinConfig;
pub use driver::{SpinDriver, SpinFrame, SpinResult, TickEvent};
pub use easing::Easing;
pub use layout::{POINTER_ANGLE, SegmentSpan, layout, total_weight};
pub use plan::plan_rotation;
pub use resolve::{resolve, resolve_index};
pub use rng::{ScriptedRng, UnitRandom, small_rng};
pub use segment::{DEFAULT_PALETTE, Segment, SegmentId, Wheel, WheelError};
pub use target::{Target, select_target};
