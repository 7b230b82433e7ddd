//! Configuration: raw key/value settings and their resolution into a
//! validated [`RetentionPolicy`].

pub mod log_level;
pub mod raw_settings;
pub mod retention_policy;

pub use log_level::LogLevel;
pub use raw_settings::RawSettings;
pub use retention_policy::RetentionPolicy;

/// Days per month used for month-based max age. Fixed, not calendar-accurate.
pub const DAYS_PER_MONTH: u64 = 30;
