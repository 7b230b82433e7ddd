//! Snapshot records as reported by the backend.

use chrono::{DateTime, Utc};

/// Lifecycle state of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotStatus {
    Creating,
    Available,
    /// Any other backend state, kept verbatim for logging.
    Other(String),
}

impl SnapshotStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "creating" => Self::Creating,
            "available" => Self::Available,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Creating => "creating",
            Self::Available => "available",
            Self::Other(s) => s,
        }
    }
}

/// A manual snapshot of the managed resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub id: String,
    pub status: SnapshotStatus,
    /// Absent while the snapshot is still being created.
    pub created_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    pub fn available(id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            status: SnapshotStatus::Available,
            created_at: Some(created_at),
        }
    }

    pub fn creating(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: SnapshotStatus::Creating,
            created_at: None,
        }
    }

    pub fn with_status(
        id: impl Into<String>,
        status: &str,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: id.into(),
            status: SnapshotStatus::parse(status),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_is_case_sensitive() {
        assert_eq!(SnapshotStatus::parse("available"), SnapshotStatus::Available);
        assert_eq!(SnapshotStatus::parse("creating"), SnapshotStatus::Creating);
        assert_eq!(
            SnapshotStatus::parse("Available"),
            SnapshotStatus::Other("Available".to_string())
        );
        assert_eq!(SnapshotStatus::parse("deleting").as_str(), "deleting");
    }
}
