//! Resolution of raw settings into a validated retention policy.

use chrono::TimeDelta;

use super::raw_settings::{
    present, MIN_DAYS_SINCE_LAST_SNAPSHOT, SNAPSHOT_MAX_AGE_IN_DAYS, SNAPSHOT_MAX_AGE_IN_MONTHS,
};
use super::{RawSettings, DAYS_PER_MONTH};
use crate::errors::ConfigError;

/// Validated parameters for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionPolicy {
    /// Database instance whose manual snapshots are managed.
    pub resource_id: String,
    /// Snapshots older than this (relative to end of today) are deleted.
    pub max_age: TimeDelta,
    /// A new snapshot is only created once the latest one is older than this.
    pub min_creation_interval: TimeDelta,
}

impl RetentionPolicy {
    pub fn new(resource_id: impl Into<String>, max_age: TimeDelta) -> Self {
        Self {
            resource_id: resource_id.into(),
            max_age,
            min_creation_interval: TimeDelta::zero(),
        }
    }

    pub fn with_min_creation_interval(mut self, interval: TimeDelta) -> Self {
        self.min_creation_interval = interval;
        self
    }

    /// Validate and normalize raw settings.
    ///
    /// A day-based max age takes precedence over a month-based one; the
    /// month value is then ignored entirely, even if it is malformed.
    pub fn resolve(raw: &RawSettings) -> Result<Self, ConfigError> {
        let resource_id = present(&raw.db_instance_id)
            .filter(|id| !id.trim().is_empty())
            .ok_or(ConfigError::MissingResourceId)?
            .to_string();

        let max_age = if let Some(days) = present(&raw.max_age_days) {
            let days = parse_count(SNAPSHOT_MAX_AGE_IN_DAYS, days)?;
            days_to_duration(SNAPSHOT_MAX_AGE_IN_DAYS, Some(days))?
        } else if let Some(months) = present(&raw.max_age_months) {
            let months = parse_count(SNAPSHOT_MAX_AGE_IN_MONTHS, months)?;
            days_to_duration(SNAPSHOT_MAX_AGE_IN_MONTHS, months.checked_mul(DAYS_PER_MONTH))?
        } else {
            return Err(ConfigError::MissingMaxAge);
        };

        let min_creation_interval = match present(&raw.min_days_since_last_snapshot) {
            Some(days) => {
                let days = parse_count(MIN_DAYS_SINCE_LAST_SNAPSHOT, days)?;
                days_to_duration(MIN_DAYS_SINCE_LAST_SNAPSHOT, Some(days))?
            }
            None => TimeDelta::zero(),
        };

        Ok(Self {
            resource_id,
            max_age,
            min_creation_interval,
        })
    }
}

fn parse_count(key: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        })
}

fn days_to_duration(key: &str, days: Option<u64>) -> Result<TimeDelta, ConfigError> {
    days.and_then(|d| i64::try_from(d).ok())
        .and_then(TimeDelta::try_days)
        .ok_or_else(|| ConfigError::DurationOverflow {
            key: key.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> RawSettings {
        RawSettings::from_vars(pairs.iter().copied())
    }

    #[test]
    fn days_value_wins_over_months() {
        let policy = RetentionPolicy::resolve(&raw(&[
            ("DB_INSTANCE_ID", "orders-db"),
            ("SNAPSHOT_MAX_AGE_IN_DAYS", "10"),
            ("SNAPSHOT_MAX_AGE_IN_MONTHS", "3"),
        ]))
        .unwrap();
        assert_eq!(policy.max_age, TimeDelta::days(10));
    }

    #[test]
    fn malformed_months_ignored_when_days_present() {
        let policy = RetentionPolicy::resolve(&raw(&[
            ("DB_INSTANCE_ID", "orders-db"),
            ("SNAPSHOT_MAX_AGE_IN_DAYS", "10"),
            ("SNAPSHOT_MAX_AGE_IN_MONTHS", "three"),
        ]))
        .unwrap();
        assert_eq!(policy.max_age, TimeDelta::days(10));
    }

    #[test]
    fn months_use_thirty_day_multiplier() {
        let policy = RetentionPolicy::resolve(&raw(&[
            ("DB_INSTANCE_ID", "orders-db"),
            ("SNAPSHOT_MAX_AGE_IN_MONTHS", "2"),
        ]))
        .unwrap();
        assert_eq!(policy.max_age, TimeDelta::days(60));
    }

    #[test]
    fn min_interval_defaults_to_zero() {
        let policy = RetentionPolicy::resolve(&raw(&[
            ("DB_INSTANCE_ID", "orders-db"),
            ("SNAPSHOT_MAX_AGE_IN_DAYS", "30"),
        ]))
        .unwrap();
        assert_eq!(policy.min_creation_interval, TimeDelta::zero());
        assert_eq!(policy.resource_id, "orders-db");
    }

    #[test]
    fn min_interval_parsed_in_days() {
        let policy = RetentionPolicy::resolve(&raw(&[
            ("DB_INSTANCE_ID", "orders-db"),
            ("SNAPSHOT_MAX_AGE_IN_DAYS", "30"),
            ("MIN_DAYS_SINCE_LAST_SNAPSHOT", " 7 "),
        ]))
        .unwrap();
        assert_eq!(policy.min_creation_interval, TimeDelta::days(7));
    }

    #[test]
    fn missing_or_empty_resource_id_rejected() {
        let err = RetentionPolicy::resolve(&raw(&[("SNAPSHOT_MAX_AGE_IN_DAYS", "30")]));
        assert_eq!(err, Err(ConfigError::MissingResourceId));

        let err = RetentionPolicy::resolve(&raw(&[
            ("DB_INSTANCE_ID", ""),
            ("SNAPSHOT_MAX_AGE_IN_DAYS", "30"),
        ]));
        assert_eq!(err, Err(ConfigError::MissingResourceId));
    }

    #[test]
    fn missing_max_age_rejected() {
        let err = RetentionPolicy::resolve(&raw(&[
            ("DB_INSTANCE_ID", "orders-db"),
            ("SNAPSHOT_MAX_AGE_IN_DAYS", ""),
        ]));
        assert_eq!(err, Err(ConfigError::MissingMaxAge));
    }

    #[test]
    fn non_numeric_and_negative_values_rejected() {
        for bad in ["abc", "-3", "1.5"] {
            let err = RetentionPolicy::resolve(&raw(&[
                ("DB_INSTANCE_ID", "orders-db"),
                ("SNAPSHOT_MAX_AGE_IN_DAYS", bad),
            ]))
            .unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidNumber { ref key, .. } if key == "SNAPSHOT_MAX_AGE_IN_DAYS"),
                "unexpected error for {bad}: {err}"
            );
        }
    }

    #[test]
    fn overflowing_values_rejected() {
        let err = RetentionPolicy::resolve(&raw(&[
            ("DB_INSTANCE_ID", "orders-db"),
            ("SNAPSHOT_MAX_AGE_IN_MONTHS", "18446744073709551615"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DurationOverflow {
                key: "SNAPSHOT_MAX_AGE_IN_MONTHS".to_string()
            }
        );
    }
}
