//! Invocation entry point: resolve → list → evaluate → delete → create.

use chrono::{DateTime, Utc};
use tracing::{error, info_span};

use crate::config::{RawSettings, RetentionPolicy};
use crate::errors::{SnapkeepError, SnapkeepResult};
use crate::models::InvocationResult;
use crate::policy::{fetch_and_evaluate, PolicyExecutor};
use crate::response::HandlerResponse;
use crate::traits::ISnapshotBackend;

/// Runs the retention policy for one resource against a backend.
pub struct SnapshotManager<B> {
    backend: B,
}

impl<B: ISnapshotBackend> SnapshotManager<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Trigger interface. The event payload is accepted and ignored.
    pub fn handle(
        &self,
        event: Option<&serde_json::Value>,
        settings: &RawSettings,
    ) -> HandlerResponse {
        self.handle_at(event, settings, Utc::now())
    }

    /// Trigger interface as of `now`.
    pub fn handle_at(
        &self,
        _event: Option<&serde_json::Value>,
        settings: &RawSettings,
        now: DateTime<Utc>,
    ) -> HandlerResponse {
        HandlerResponse::from(&self.run_at(settings, now))
    }

    /// Trigger interface for an already resolved policy.
    pub fn handle_policy(
        &self,
        _event: Option<&serde_json::Value>,
        policy: &RetentionPolicy,
    ) -> HandlerResponse {
        HandlerResponse::from(&self.run_policy_at(policy, Utc::now()))
    }

    /// One invocation at the current time.
    pub fn run(&self, settings: &RawSettings) -> InvocationResult {
        self.run_at(settings, Utc::now())
    }

    /// One invocation as of `now`. Never fails: every error becomes an
    /// `InvocationResult::Failure`.
    pub fn run_at(&self, settings: &RawSettings, now: DateTime<Utc>) -> InvocationResult {
        match RetentionPolicy::resolve(settings) {
            Ok(policy) => self.run_policy_at(&policy, now),
            Err(e) => failure(e.into()),
        }
    }

    /// Evaluate and execute a validated policy as of `now`.
    pub fn run_policy_at(&self, policy: &RetentionPolicy, now: DateTime<Utc>) -> InvocationResult {
        match self.execute(policy, now) {
            Ok(result) => result,
            Err(e) => failure(e),
        }
    }

    fn execute(&self, policy: &RetentionPolicy, now: DateTime<Utc>) -> SnapkeepResult<InvocationResult> {
        let span = info_span!("snapshot_retention", resource_id = %policy.resource_id);
        let _guard = span.enter();

        let evaluation = fetch_and_evaluate(&self.backend, policy, now)?;
        let result = PolicyExecutor::new(&self.backend, policy).execute(&evaluation, now)?;
        Ok(result)
    }
}

/// Log an invocation error and turn it into a failure result.
pub fn failure(err: SnapkeepError) -> InvocationResult {
    error!(error = %err, code = err.error_code(), "snapshot management failed");
    InvocationResult::from(err)
}
