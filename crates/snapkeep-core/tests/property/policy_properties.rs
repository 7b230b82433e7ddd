//! Property tests for the retention policy.
//!
//! - repeated evaluation keeps proposing an expired snapshot until it is gone
//! - a `creating` snapshot anywhere in the listing prevents creation
//! - no `available` and no `creating` snapshot: nothing is created
//! - a days value always wins over a months value

use proptest::prelude::*;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use snapkeep_core::policy::{end_of_day, evaluate_inventory, threshold};
use snapkeep_core::traits::ISnapshotBackendStub;
use snapkeep_core::{RawSettings, RetentionPolicy, Snapshot, SnapshotManager};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 18, 45, 0).unwrap()
}

fn settings(max_age_days: u32, min_days: u32) -> RawSettings {
    RawSettings::from_vars([
        ("DB_INSTANCE_ID".to_string(), "orders-db".to_string()),
        ("SNAPSHOT_MAX_AGE_IN_DAYS".to_string(), max_age_days.to_string()),
        ("MIN_DAYS_SINCE_LAST_SNAPSHOT".to_string(), min_days.to_string()),
    ])
}

/// Snapshot with a status drawn from available/other and an age in hours.
fn arb_settled_snapshot() -> impl Strategy<Value = Snapshot> {
    (0u32..10_000, 0i64..24 * 400, prop::bool::ANY).prop_map(|(n, age_hours, available)| {
        let created_at = now() - TimeDelta::hours(age_hours);
        if available {
            Snapshot::available(format!("snap-{n}"), created_at)
        } else {
            Snapshot::with_status(format!("snap-{n}"), "failed", Some(created_at))
        }
    })
}

proptest! {
    #[test]
    fn prop_expired_snapshot_stays_candidate(
        max_age_days in 0u32..365,
        extra_hours in 1i64..24 * 365,
        repeats in 1usize..5,
    ) {
        let policy = RetentionPolicy::new("orders-db", TimeDelta::days(max_age_days.into()));
        let cutoff = threshold(end_of_day(now()), policy.max_age);
        let snapshots = vec![Snapshot::available("expired", cutoff - TimeDelta::hours(extra_hours))];

        for i in 0..repeats {
            let at = now() + TimeDelta::minutes(i as i64);
            let result = evaluate_inventory(&snapshots, &policy, at).unwrap();
            prop_assert_eq!(result.deletion_candidates, vec!["expired".to_string()]);
        }
    }

    #[test]
    fn prop_creating_prevents_creation(
        mut snapshots in prop::collection::vec(arb_settled_snapshot(), 0..12),
        position in 0usize..12,
        max_age_days in 1u32..90,
        min_days in 0u32..30,
    ) {
        let index = position.min(snapshots.len());
        snapshots.insert(index, Snapshot::creating("in-flight"));
        let stub = ISnapshotBackendStub::with_snapshots(snapshots);
        let manager = SnapshotManager::new(&stub);

        let result = manager.run_at(&settings(max_age_days, min_days), now());

        prop_assert!(result.is_success());
        prop_assert!(!result.new_snapshot_created());
        prop_assert!(stub.created_ids().is_empty());
        prop_assert!(stub.deleted_ids().is_empty());
    }

    #[test]
    fn prop_no_history_no_creation(
        ages in prop::collection::vec(0i64..24 * 400, 0..10),
        min_days in 0u32..30,
    ) {
        let snapshots = ages
            .iter()
            .enumerate()
            .map(|(i, h)| Snapshot::with_status(format!("s{i}"), "failed", Some(now() - TimeDelta::hours(*h))))
            .collect();
        let stub = ISnapshotBackendStub::with_snapshots(snapshots);
        let manager = SnapshotManager::new(&stub);

        let result = manager.run_at(&settings(30, min_days), now());

        prop_assert!(!result.new_snapshot_created());
        prop_assert!(stub.created_ids().is_empty());
    }

    #[test]
    fn prop_days_take_precedence_over_months(days in 0u32..10_000, months in 0u32..1_000) {
        let raw = RawSettings::from_vars([
            ("DB_INSTANCE_ID".to_string(), "orders-db".to_string()),
            ("SNAPSHOT_MAX_AGE_IN_DAYS".to_string(), days.to_string()),
            ("SNAPSHOT_MAX_AGE_IN_MONTHS".to_string(), months.to_string()),
        ]);
        let policy = RetentionPolicy::resolve(&raw).unwrap();
        prop_assert_eq!(policy.max_age, TimeDelta::days(days.into()));
    }
}
