//! Retention policy: inventory evaluation and execution.

pub mod clock;
pub mod evaluator;
pub mod executor;

pub use clock::{end_of_day, new_snapshot_id, threshold};
pub use evaluator::{evaluate_inventory, fetch_and_evaluate};
pub use executor::{should_create, PolicyExecutor};
