mod backend_error;
mod config_error;
mod snapkeep_error;

pub use backend_error::BackendError;
pub use config_error::ConfigError;
pub use snapkeep_error::{SnapkeepError, SnapkeepResult};
