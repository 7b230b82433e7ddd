//! Outcome of evaluating a snapshot inventory.

use chrono::{DateTime, Utc};

/// Freshness of the resource's most recent usable snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatestSnapshot {
    /// No `available` snapshot was seen.
    NoneFound,
    /// A snapshot is still being created; freshness is unknown.
    InProgress,
    /// Creation time of the newest `available` snapshot.
    At(DateTime<Utc>),
}

impl LatestSnapshot {
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::At(t) => Some(*t),
            _ => None,
        }
    }
}

/// Per-invocation evaluation of the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    /// Entries returned by the listing call, regardless of status.
    pub total_snapshot_count: usize,
    pub latest: LatestSnapshot,
    /// Snapshots to delete, in listing order. Never contains a `creating`
    /// snapshot, and is empty whenever `latest` is `InProgress`.
    pub deletion_candidates: Vec<String>,
}
