//! `ISnapshotBackendStub` — in-memory test double for `ISnapshotBackend`.
//!
//! Records every call in order so tests can assert on exactly which remote
//! operations an invocation issued. Deleted snapshots leave the inventory;
//! created ones join it with status `creating`.

use std::sync::Mutex;

use crate::errors::BackendError;
use crate::models::Snapshot;

use super::snapshot_backend::ISnapshotBackend;

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    List { resource_id: String },
    Delete { snapshot_id: String },
    Create { resource_id: String, snapshot_id: String },
}

/// In-memory stub implementation of `ISnapshotBackend`.
#[derive(Default)]
pub struct ISnapshotBackendStub {
    inventory: Mutex<Vec<Snapshot>>,
    calls: Mutex<Vec<BackendCall>>,
    fail_list: Mutex<Option<BackendError>>,
    fail_delete: Mutex<Option<(String, BackendError)>>,
    fail_create: Mutex<Option<BackendError>>,
}

impl ISnapshotBackendStub {
    /// Create an empty stub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stub seeded with `snapshots`, kept in the given order.
    pub fn with_snapshots(snapshots: Vec<Snapshot>) -> Self {
        let stub = Self::new();
        *stub.inventory.lock().unwrap() = snapshots;
        stub
    }

    pub fn push_snapshot(&self, snapshot: Snapshot) {
        self.inventory.lock().unwrap().push(snapshot);
    }

    /// Make the next listing call fail with `err`.
    pub fn fail_list_with(&self, err: BackendError) {
        *self.fail_list.lock().unwrap() = Some(err);
    }

    /// Make deletion of `snapshot_id` fail with `err`.
    pub fn fail_delete_of(&self, snapshot_id: &str, err: BackendError) {
        *self.fail_delete.lock().unwrap() = Some((snapshot_id.to_string(), err));
    }

    /// Make the next create call fail with `err`.
    pub fn fail_create_with(&self, err: BackendError) {
        *self.fail_create.lock().unwrap() = Some(err);
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn inventory(&self) -> Vec<Snapshot> {
        self.inventory.lock().unwrap().clone()
    }

    pub fn deleted_ids(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                BackendCall::Delete { snapshot_id } => Some(snapshot_id),
                _ => None,
            })
            .collect()
    }

    pub fn created_ids(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                BackendCall::Create { snapshot_id, .. } => Some(snapshot_id),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: BackendCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ISnapshotBackend for ISnapshotBackendStub {
    fn list_manual_snapshots(&self, resource_id: &str) -> Result<Vec<Snapshot>, BackendError> {
        self.record(BackendCall::List {
            resource_id: resource_id.to_string(),
        });
        if let Some(err) = self.fail_list.lock().unwrap().take() {
            return Err(err);
        }
        Ok(self.inventory())
    }

    fn delete_snapshot(&self, snapshot_id: &str) -> Result<(), BackendError> {
        self.record(BackendCall::Delete {
            snapshot_id: snapshot_id.to_string(),
        });
        let mut fail = self.fail_delete.lock().unwrap();
        if fail.as_ref().is_some_and(|(id, _)| id == snapshot_id) {
            if let Some((_, err)) = fail.take() {
                return Err(err);
            }
        }
        self.inventory.lock().unwrap().retain(|s| s.id != snapshot_id);
        Ok(())
    }

    fn create_snapshot(&self, resource_id: &str, snapshot_id: &str) -> Result<(), BackendError> {
        self.record(BackendCall::Create {
            resource_id: resource_id.to_string(),
            snapshot_id: snapshot_id.to_string(),
        });
        if let Some(err) = self.fail_create.lock().unwrap().take() {
            return Err(err);
        }
        self.push_snapshot(Snapshot::creating(snapshot_id));
        Ok(())
    }
}
