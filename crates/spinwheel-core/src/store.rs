#![forbid(unsafe_code)]

//! Contracts with the host product's storage and analytics layers.
//!
//! The engine treats persistence as an external collaborator: these traits
//! are the entire boundary. Backends (the host's remote document store)
//! live elsewhere; only [`MemoryLedger`], the double used by tests and the
//! demo, ships here. [`distribution`] is the one pure piece of the
//! analytics story — turning a record ledger into per-segment counts and
//! percentages — so it lives with the engine rather than behind the trait.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::driver::SpinResult;
use crate::segment::{Segment, SegmentId, Wheel};

/// Failure surfaced by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("wheel `{0}` not found")]
    NotFound(String),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// CRUD over stored wheel definitions.
pub trait WheelStore {
    fn get(&self, wheel_id: &str) -> Result<Option<Wheel>, StoreError>;
    fn list(&self) -> Result<Vec<Wheel>, StoreError>;
    fn save(&mut self, wheel: Wheel) -> Result<(), StoreError>;
    fn delete(&mut self, wheel_id: &str) -> Result<(), StoreError>;
}

/// Append-only history of completed spins.
pub trait SpinLedger {
    fn record(&mut self, record: SpinRecord) -> Result<(), StoreError>;

    /// Most recent records first, at most `limit` of them.
    fn recent(&self, limit: usize) -> Result<Vec<SpinRecord>, StoreError>;
}

/// One completed spin, as the history collaborator stores it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpinRecord {
    pub wheel_id: String,
    pub segment_id: SegmentId,
    pub label: String,
}

impl SpinRecord {
    /// Build a record from a delivered [`SpinResult`].
    #[must_use]
    pub fn from_result(wheel_id: impl Into<String>, result: &SpinResult) -> Self {
        Self {
            wheel_id: wheel_id.into(),
            segment_id: result.segment.id().clone(),
            label: result.segment.label().to_string(),
        }
    }
}

/// Aggregated outcome share for one segment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentShare {
    pub segment_id: SegmentId,
    pub label: String,
    pub count: u64,
    /// Share of all recorded spins, in percent. 0 when the ledger is empty.
    pub percentage: f64,
}

/// Aggregate a ledger into per-segment counts and percentages.
///
/// Output follows the wheel's segment order. Records referencing segments
/// no longer on the wheel are ignored.
#[must_use]
pub fn distribution(segments: &[Segment], records: &[SpinRecord]) -> Vec<SegmentShare> {
    let counts: Vec<u64> = segments
        .iter()
        .map(|segment| {
            records
                .iter()
                .filter(|record| record.segment_id == *segment.id())
                .count() as u64
        })
        .collect();
    let total: u64 = counts.iter().sum();

    segments
        .iter()
        .zip(counts)
        .map(|(segment, count)| SegmentShare {
            segment_id: segment.id().clone(),
            label: segment.label().to_string(),
            count,
            percentage: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            },
        })
        .collect()
}

/// In-memory [`SpinLedger`] for tests and the demo.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    records: Vec<SpinRecord>,
}

impl MemoryLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, oldest first.
    #[must_use]
    pub fn records(&self) -> &[SpinRecord] {
        &self.records
    }
}

impl SpinLedger for MemoryLedger {
    fn record(&mut self, record: SpinRecord) -> Result<(), StoreError> {
        self.records.push(record);
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<SpinRecord>, StoreError> {
        Ok(self.records.iter().rev().take(limit).cloned().collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
