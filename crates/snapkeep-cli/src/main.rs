//! `snapkeep` — apply the snapshot retention policy once and print the
//! result as JSON.

mod bootstrap;
mod logging;

use snapkeep_core::RawSettings;
use snapkeep_rds::RdsSnapshotBackend;

fn main() -> anyhow::Result<()> {
    let settings = RawSettings::from_os_vars(std::env::vars_os());
    logging::init_logging(settings.log_level());

    let response = bootstrap::invoke(&settings, RdsSnapshotBackend::connect);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
