//! # snapkeep-rds
//!
//! `ISnapshotBackend` over the Amazon RDS API. Each capability is a single
//! SDK request driven to completion on a private current-thread runtime, so
//! callers stay synchronous and calls never overlap.

pub mod backend;
pub mod convert;

pub use backend::RdsSnapshotBackend;
