//! Reference-instant arithmetic shared by deletion and creation decisions.

use chrono::{DateTime, NaiveTime, TimeDelta, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// Last second (23:59:59, no sub-second part) of `now`'s UTC calendar day.
pub fn end_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc()
        .checked_add_signed(TimeDelta::seconds(SECONDS_PER_DAY - 1))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// `reference - age`, saturating at the earliest representable instant.
pub fn threshold(reference: DateTime<Utc>, age: TimeDelta) -> DateTime<Utc> {
    reference
        .checked_sub_signed(age)
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Identifier for a snapshot created at `now`. Unique per resource at
/// one-second granularity.
pub fn new_snapshot_id(resource_id: &str, now: DateTime<Utc>) -> String {
    format!(
        "{}-manual-snapshot-{}",
        resource_id,
        now.format("%Y-%m-%d-%H-%M-%S")
    )
}
