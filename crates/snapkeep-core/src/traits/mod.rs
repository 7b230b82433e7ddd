//! Backend seam: the capabilities the policy needs from snapshot storage.

pub mod snapshot_backend;
pub mod test_helpers;

pub use snapshot_backend::ISnapshotBackend;
pub use test_helpers::{BackendCall, ISnapshotBackendStub};
