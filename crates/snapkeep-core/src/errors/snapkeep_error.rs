use super::{BackendError, ConfigError};

/// Top-level error for one invocation.
/// Both subsystem errors convert into this via `From` impls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapkeepError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

impl SnapkeepError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Backend(e) => e.error_code(),
        }
    }
}

/// Convenience type alias.
pub type SnapkeepResult<T> = Result<T, SnapkeepError>;
