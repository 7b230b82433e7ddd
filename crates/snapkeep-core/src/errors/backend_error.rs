/// Failures reported by, or about, the snapshot backend.
///
/// Any failure of a backend capability lands here, whether the backend
/// answered with something unusable or the call itself failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("Backend returned a malformed response: {0}")]
    MalformedResponse(String),

    #[error("Listing snapshots for {resource_id} failed: {reason}")]
    ListFailed { resource_id: String, reason: String },

    #[error("Deleting snapshot {snapshot_id} failed: {reason}")]
    DeleteFailed { snapshot_id: String, reason: String },

    #[error("Creating snapshot {snapshot_id} failed: {reason}")]
    CreateFailed { snapshot_id: String, reason: String },

    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

impl BackendError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedResponse(_) => "MALFORMED_RESPONSE",
            Self::ListFailed { .. } => "LIST_FAILED",
            Self::DeleteFailed { .. } => "DELETE_FAILED",
            Self::CreateFailed { .. } => "CREATE_FAILED",
            Self::Unavailable(_) => "BACKEND_UNAVAILABLE",
        }
    }
}
