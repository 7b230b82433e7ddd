//! Structured result of one invocation.

use crate::errors::SnapkeepError;

/// What a single run did, or why it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationResult {
    Success {
        previous_snapshot_count: usize,
        new_snapshot_created: bool,
        deleted_snapshot_ids: Vec<String>,
        new_snapshot_id: Option<String>,
    },
    Failure {
        error_code: &'static str,
        message: String,
    },
}

impl InvocationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn new_snapshot_created(&self) -> bool {
        matches!(
            self,
            Self::Success {
                new_snapshot_created: true,
                ..
            }
        )
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failure { message, .. } => Some(message),
            Self::Success { .. } => None,
        }
    }
}

impl From<SnapkeepError> for InvocationResult {
    fn from(err: SnapkeepError) -> Self {
        Self::Failure {
            error_code: err.error_code(),
            message: err.to_string(),
        }
    }
}
