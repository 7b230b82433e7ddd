//! Wiring between process environment, backend construction and handler.

use snapkeep_core::handler::failure;
use snapkeep_core::{
    BackendError, HandlerResponse, ISnapshotBackend, RawSettings, RetentionPolicy, SnapshotManager,
};

/// Run one invocation.
///
/// Configuration is validated before `connect` is called, so a bad
/// configuration never reaches the backend. Failures to build the backend
/// are reported like any other invocation failure.
pub fn invoke<B, F>(settings: &RawSettings, connect: F) -> HandlerResponse
where
    B: ISnapshotBackend,
    F: FnOnce() -> Result<B, BackendError>,
{
    let policy = match RetentionPolicy::resolve(settings) {
        Ok(policy) => policy,
        Err(e) => return HandlerResponse::from(&failure(e.into())),
    };

    match connect() {
        Ok(backend) => SnapshotManager::new(backend).handle_policy(None, &policy),
        Err(e) => HandlerResponse::from(&failure(e.into())),
    }
}
