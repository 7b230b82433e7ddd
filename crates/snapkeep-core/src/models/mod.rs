mod evaluation;
mod invocation;
mod snapshot;

pub use evaluation::{EvaluationResult, LatestSnapshot};
pub use invocation::InvocationResult;
pub use snapshot::{Snapshot, SnapshotStatus};
