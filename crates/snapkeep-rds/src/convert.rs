//! Mapping of RDS API records onto snapkeep models.

use aws_sdk_rds::error::DisplayErrorContext;
use aws_sdk_rds::primitives::DateTime as AwsDateTime;
use aws_sdk_rds::types::DbSnapshot;
use chrono::{DateTime, Utc};

use snapkeep_core::{BackendError, Snapshot, SnapshotStatus};

/// Convert one `DbSnapshot`. Identifier and status are required; an
/// unrepresentable creation time is a malformed response.
pub fn snapshot_from_rds(record: &DbSnapshot) -> Result<Snapshot, BackendError> {
    let id = record.db_snapshot_identifier().ok_or_else(|| {
        BackendError::MalformedResponse("DB snapshot without an identifier".to_string())
    })?;
    let status = record.status().ok_or_else(|| {
        BackendError::MalformedResponse(format!("DB snapshot {id} has no status"))
    })?;
    let created_at = record
        .snapshot_create_time()
        .map(|t| {
            to_chrono(t).ok_or_else(|| {
                BackendError::MalformedResponse(format!(
                    "DB snapshot {id} has an out-of-range creation time"
                ))
            })
        })
        .transpose()?;

    Ok(Snapshot {
        id: id.to_string(),
        status: SnapshotStatus::parse(status),
        created_at,
    })
}

/// Convert a listing. A response without a snapshot list is malformed.
pub fn snapshots_from_rds(records: Option<&[DbSnapshot]>) -> Result<Vec<Snapshot>, BackendError> {
    records
        .ok_or_else(|| {
            BackendError::MalformedResponse(
                "describe_db_snapshots returned no snapshot list".to_string(),
            )
        })?
        .iter()
        .map(snapshot_from_rds)
        .collect()
}

fn to_chrono(t: &AwsDateTime) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(t.secs(), t.subsec_nanos())
}

/// Full error text of an SDK failure, including its source chain.
pub(crate) fn describe<E: std::error::Error>(err: &E) -> String {
    DisplayErrorContext(err).to_string()
}
