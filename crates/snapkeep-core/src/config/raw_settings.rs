//! Unvalidated run settings, as handed over by the bootstrap layer.

use std::ffi::OsString;

use serde::{Deserialize, Serialize};

use super::LogLevel;

pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const DB_INSTANCE_ID: &str = "DB_INSTANCE_ID";
pub const SNAPSHOT_MAX_AGE_IN_DAYS: &str = "SNAPSHOT_MAX_AGE_IN_DAYS";
pub const SNAPSHOT_MAX_AGE_IN_MONTHS: &str = "SNAPSHOT_MAX_AGE_IN_MONTHS";
pub const MIN_DAYS_SINCE_LAST_SNAPSHOT: &str = "MIN_DAYS_SINCE_LAST_SNAPSHOT";

/// Raw settings keyed by their environment names.
///
/// Every field is optional here; [`super::RetentionPolicy::resolve`] decides
/// what is required. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    #[serde(rename = "LOG_LEVEL")]
    pub log_level: Option<String>,
    #[serde(rename = "DB_INSTANCE_ID")]
    pub db_instance_id: Option<String>,
    #[serde(rename = "SNAPSHOT_MAX_AGE_IN_DAYS")]
    pub max_age_days: Option<String>,
    #[serde(rename = "SNAPSHOT_MAX_AGE_IN_MONTHS")]
    pub max_age_months: Option<String>,
    #[serde(rename = "MIN_DAYS_SINCE_LAST_SNAPSHOT")]
    pub min_days_since_last_snapshot: Option<String>,
}

impl RawSettings {
    /// Build settings from key/value pairs. Unknown keys are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut settings = Self::default();
        for (key, value) in vars {
            let slot = match key.as_ref() {
                LOG_LEVEL => &mut settings.log_level,
                DB_INSTANCE_ID => &mut settings.db_instance_id,
                SNAPSHOT_MAX_AGE_IN_DAYS => &mut settings.max_age_days,
                SNAPSHOT_MAX_AGE_IN_MONTHS => &mut settings.max_age_months,
                MIN_DAYS_SINCE_LAST_SNAPSHOT => &mut settings.min_days_since_last_snapshot,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        settings
    }

    /// Build settings from OS-level pairs, such as `std::env::vars_os()`.
    ///
    /// Entries whose key is not valid UTF-8 cannot be one of ours and are
    /// skipped. Values are converted lossily, so a mangled value still
    /// reaches validation instead of aborting the process.
    pub fn from_os_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        Self::from_vars(vars.into_iter().filter_map(|(key, value)| {
            let key = key.into_string().ok()?;
            Some((key, value.to_string_lossy().into_owned()))
        }))
    }

    /// The configured log level; never fails.
    pub fn log_level(&self) -> LogLevel {
        LogLevel::resolve(present(&self.log_level))
    }
}

/// A value that is set and non-empty.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
