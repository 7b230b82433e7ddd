//! Policy execution: issue deletions, then decide on a new snapshot.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::clock::{end_of_day, new_snapshot_id, threshold};
use crate::config::RetentionPolicy;
use crate::errors::BackendError;
use crate::models::{EvaluationResult, InvocationResult, LatestSnapshot};
use crate::traits::ISnapshotBackend;

/// Whether a new snapshot is due.
///
/// Only a concrete latest snapshot strictly older than
/// `end_of_day(now) - min_creation_interval` qualifies. An in-progress
/// creation or an empty history never does.
pub fn should_create(latest: LatestSnapshot, policy: &RetentionPolicy, now: DateTime<Utc>) -> bool {
    latest
        .instant()
        .is_some_and(|t| t < threshold(end_of_day(now), policy.min_creation_interval))
}

/// Applies an evaluation against the backend.
pub struct PolicyExecutor<'a, B: ISnapshotBackend + ?Sized> {
    backend: &'a B,
    policy: &'a RetentionPolicy,
}

impl<'a, B: ISnapshotBackend + ?Sized> PolicyExecutor<'a, B> {
    pub fn new(backend: &'a B, policy: &'a RetentionPolicy) -> Self {
        Self { backend, policy }
    }

    /// Delete every candidate in order, then create at most one snapshot.
    /// The first backend failure aborts the rest.
    pub fn execute(
        &self,
        evaluation: &EvaluationResult,
        now: DateTime<Utc>,
    ) -> Result<InvocationResult, BackendError> {
        for snapshot_id in &evaluation.deletion_candidates {
            self.backend.delete_snapshot(snapshot_id)?;
            debug!(snapshot_id = %snapshot_id, "deletion requested");
        }

        match evaluation.latest {
            LatestSnapshot::At(t) => info!(
                resource_id = %self.policy.resource_id,
                latest = %t,
                "latest manual snapshot"
            ),
            other => info!(
                resource_id = %self.policy.resource_id,
                latest = ?other,
                "no completed manual snapshot to compare against"
            ),
        }

        let new_snapshot_id = if should_create(evaluation.latest, self.policy, now) {
            let snapshot_id = new_snapshot_id(&self.policy.resource_id, now);
            info!(
                snapshot_id = %snapshot_id,
                resource_id = %self.policy.resource_id,
                "creating new snapshot"
            );
            self.backend
                .create_snapshot(&self.policy.resource_id, &snapshot_id)?;
            Some(snapshot_id)
        } else {
            info!("no new snapshot created");
            None
        };

        Ok(InvocationResult::Success {
            previous_snapshot_count: evaluation.total_snapshot_count,
            new_snapshot_created: new_snapshot_id.is_some(),
            deleted_snapshot_ids: evaluation.deletion_candidates.clone(),
            new_snapshot_id,
        })
    }
}
