//! Wire shape of the trigger interface's return value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::InvocationResult;

pub const STATUS_OK: u16 = 200;
pub const STATUS_FAILURE: u16 = 500;

/// HTTP-shaped response: `statusCode`, `headers`, and a JSON-encoded `body`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessBody {
    pub previous_snapshots_count: usize,
    pub new_snapshot_created: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureBody {
    pub error_message: String,
}

impl HandlerResponse {
    pub fn is_success(&self) -> bool {
        self.status_code == STATUS_OK
    }

    fn json(status_code: u16, body: &impl Serialize) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            status_code,
            headers,
            body: serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string()),
        }
    }
}

impl From<&InvocationResult> for HandlerResponse {
    fn from(result: &InvocationResult) -> Self {
        match result {
            InvocationResult::Success {
                previous_snapshot_count,
                new_snapshot_created,
                ..
            } => Self::json(
                STATUS_OK,
                &SuccessBody {
                    previous_snapshots_count: *previous_snapshot_count,
                    new_snapshot_created: *new_snapshot_created,
                },
            ),
            InvocationResult::Failure { message, .. } => Self::json(
                STATUS_FAILURE,
                &FailureBody {
                    error_message: message.clone(),
                },
            ),
        }
    }
}
