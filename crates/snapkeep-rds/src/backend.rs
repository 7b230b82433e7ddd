//! `RdsSnapshotBackend` — blocking adapter over `aws_sdk_rds::Client`.

use aws_config::BehaviorVersion;
use aws_sdk_rds::Client;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use snapkeep_core::{BackendError, ISnapshotBackend, Snapshot};

use crate::convert::{describe, snapshots_from_rds};

const MANUAL_SNAPSHOT_TYPE: &str = "manual";

pub struct RdsSnapshotBackend {
    client: Client,
    runtime: Runtime,
}

impl RdsSnapshotBackend {
    /// Build a client from the default AWS credential and region chain.
    pub fn connect() -> Result<Self, BackendError> {
        let runtime = current_thread_runtime()?;
        let config = runtime.block_on(aws_config::defaults(BehaviorVersion::latest()).load());
        Ok(Self {
            client: Client::new(&config),
            runtime,
        })
    }

    /// Wrap an already configured client.
    pub fn with_client(client: Client) -> Result<Self, BackendError> {
        Ok(Self {
            client,
            runtime: current_thread_runtime()?,
        })
    }
}

fn current_thread_runtime() -> Result<Runtime, BackendError> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| BackendError::Unavailable(format!("failed to start async runtime: {e}")))
}

impl ISnapshotBackend for RdsSnapshotBackend {
    fn list_manual_snapshots(&self, resource_id: &str) -> Result<Vec<Snapshot>, BackendError> {
        let output = self
            .runtime
            .block_on(
                self.client
                    .describe_db_snapshots()
                    .db_instance_identifier(resource_id)
                    .snapshot_type(MANUAL_SNAPSHOT_TYPE)
                    .send(),
            )
            .map_err(|e| BackendError::ListFailed {
                resource_id: resource_id.to_string(),
                reason: describe(&e),
            })?;
        debug!(?output, "describe_db_snapshots response");
        snapshots_from_rds(output.db_snapshots.as_deref())
    }

    fn delete_snapshot(&self, snapshot_id: &str) -> Result<(), BackendError> {
        let output = self
            .runtime
            .block_on(
                self.client
                    .delete_db_snapshot()
                    .db_snapshot_identifier(snapshot_id)
                    .send(),
            )
            .map_err(|e| BackendError::DeleteFailed {
                snapshot_id: snapshot_id.to_string(),
                reason: describe(&e),
            })?;
        debug!(?output, "delete_db_snapshot response");
        Ok(())
    }

    fn create_snapshot(&self, resource_id: &str, snapshot_id: &str) -> Result<(), BackendError> {
        let output = self
            .runtime
            .block_on(
                self.client
                    .create_db_snapshot()
                    .db_instance_identifier(resource_id)
                    .db_snapshot_identifier(snapshot_id)
                    .send(),
            )
            .map_err(|e| BackendError::CreateFailed {
                snapshot_id: snapshot_id.to_string(),
                reason: describe(&e),
            })?;
        debug!(?output, "create_db_snapshot response");
        Ok(())
    }
}
