//! `ISnapshotBackend` — list, delete and create manual snapshots.

use std::sync::Arc;

use crate::errors::BackendError;
use crate::models::Snapshot;

/// Snapshot storage as seen by the retention policy.
///
/// Delete and create only *request* the operation; implementations return
/// once the backend has accepted it and never wait for completion.
pub trait ISnapshotBackend: Send + Sync {
    /// List manual snapshots of `resource_id` in backend order.
    fn list_manual_snapshots(&self, resource_id: &str) -> Result<Vec<Snapshot>, BackendError>;

    /// Request deletion of a snapshot.
    fn delete_snapshot(&self, snapshot_id: &str) -> Result<(), BackendError>;

    /// Request a new manual snapshot of `resource_id` named `snapshot_id`.
    fn create_snapshot(&self, resource_id: &str, snapshot_id: &str) -> Result<(), BackendError>;
}

// ─── Blanket impls ──────────────────────────────────────────────────

impl<T: ISnapshotBackend + ?Sized> ISnapshotBackend for Arc<T> {
    fn list_manual_snapshots(&self, resource_id: &str) -> Result<Vec<Snapshot>, BackendError> {
        (**self).list_manual_snapshots(resource_id)
    }
    fn delete_snapshot(&self, snapshot_id: &str) -> Result<(), BackendError> {
        (**self).delete_snapshot(snapshot_id)
    }
    fn create_snapshot(&self, resource_id: &str, snapshot_id: &str) -> Result<(), BackendError> {
        (**self).create_snapshot(resource_id, snapshot_id)
    }
}

impl<T: ISnapshotBackend + ?Sized> ISnapshotBackend for &T {
    fn list_manual_snapshots(&self, resource_id: &str) -> Result<Vec<Snapshot>, BackendError> {
        (**self).list_manual_snapshots(resource_id)
    }
    fn delete_snapshot(&self, snapshot_id: &str) -> Result<(), BackendError> {
        (**self).delete_snapshot(snapshot_id)
    }
    fn create_snapshot(&self, resource_id: &str, snapshot_id: &str) -> Result<(), BackendError> {
        (**self).create_snapshot(resource_id, snapshot_id)
    }
}
