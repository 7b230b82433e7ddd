//! # snapkeep-core
//!
//! Retention-and-creation policy for manual snapshots of one database
//! instance. Each invocation deletes snapshots older than a maximum age and
//! creates a new one when the latest completed snapshot is old enough.
//!
//! ## Modules
//! - `config` — RawSettings, LogLevel, RetentionPolicy resolution
//! - `errors` — ConfigError, BackendError, SnapkeepError
//! - `models` — Snapshot, EvaluationResult, InvocationResult
//! - `policy` — reference-instant arithmetic, evaluator, executor
//! - `traits` — ISnapshotBackend and its in-memory stub
//! - `handler` — SnapshotManager, the invocation pipeline
//! - `response` — HTTP-shaped wire response

pub mod config;
pub mod errors;
pub mod handler;
pub mod models;
pub mod policy;
pub mod response;
pub mod traits;

pub use config::{LogLevel, RawSettings, RetentionPolicy};
pub use errors::{BackendError, ConfigError, SnapkeepError, SnapkeepResult};
pub use handler::SnapshotManager;
pub use models::{EvaluationResult, InvocationResult, LatestSnapshot, Snapshot, SnapshotStatus};
pub use response::HandlerResponse;
pub use traits::ISnapshotBackend;
