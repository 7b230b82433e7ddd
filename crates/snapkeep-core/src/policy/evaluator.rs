//! Snapshot inventory evaluation: freshness and deletion candidates.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::clock::{end_of_day, threshold};
use crate::config::RetentionPolicy;
use crate::errors::BackendError;
use crate::models::{EvaluationResult, LatestSnapshot, Snapshot, SnapshotStatus};
use crate::traits::ISnapshotBackend;

/// List the resource's manual snapshots (one call) and evaluate them.
pub fn fetch_and_evaluate<B: ISnapshotBackend + ?Sized>(
    backend: &B,
    policy: &RetentionPolicy,
    now: DateTime<Utc>,
) -> Result<EvaluationResult, BackendError> {
    let snapshots = backend.list_manual_snapshots(&policy.resource_id)?;
    debug!(?snapshots, "listed manual snapshots");
    info!(
        count = snapshots.len(),
        resource_id = %policy.resource_id,
        "found manual snapshots"
    );
    evaluate_inventory(&snapshots, policy, now)
}

/// Classify `snapshots` in the order given.
///
/// A `creating` snapshot stops the scan: freshness becomes `InProgress` and
/// no deletions are proposed. Statuses other than `available` are skipped.
pub fn evaluate_inventory(
    snapshots: &[Snapshot],
    policy: &RetentionPolicy,
    now: DateTime<Utc>,
) -> Result<EvaluationResult, BackendError> {
    let cutoff = threshold(end_of_day(now), policy.max_age);
    let mut latest: Option<DateTime<Utc>> = None;
    let mut deletion_candidates = Vec::new();

    debug!(%cutoff, max_age_days = policy.max_age.num_days(), "searching for expired snapshots");

    for snapshot in snapshots {
        let created_at = match snapshot.status {
            SnapshotStatus::Creating => {
                info!(snapshot_id = %snapshot.id, "snapshot creation in progress, skipping evaluation");
                return Ok(EvaluationResult {
                    total_snapshot_count: snapshots.len(),
                    latest: LatestSnapshot::InProgress,
                    deletion_candidates: Vec::new(),
                });
            }
            SnapshotStatus::Other(ref status) => {
                debug!(snapshot_id = %snapshot.id, status = %status, "ignoring snapshot");
                continue;
            }
            SnapshotStatus::Available => snapshot.created_at.ok_or_else(|| {
                BackendError::MalformedResponse(format!(
                    "available snapshot {} has no creation time",
                    snapshot.id
                ))
            })?,
        };

        if latest.map_or(true, |t| created_at > t) {
            latest = Some(created_at);
        }

        if created_at < cutoff {
            info!(
                snapshot_id = %snapshot.id,
                %created_at,
                max_age_days = policy.max_age.num_days(),
                "snapshot expired, marked for deletion"
            );
            deletion_candidates.push(snapshot.id.clone());
        }
    }

    Ok(EvaluationResult {
        total_snapshot_count: snapshots.len(),
        latest: latest.map_or(LatestSnapshot::NoneFound, LatestSnapshot::At),
        deletion_candidates,
    })
}
