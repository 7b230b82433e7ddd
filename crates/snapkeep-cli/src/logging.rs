//! Process-wide logging, configured once from the validated `LOG_LEVEL`.

use std::sync::Once;

use snapkeep_core::LogLevel;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Install the global subscriber. Later calls are no-ops.
///
/// Logs go to stderr; stdout carries only the invocation result.
pub fn init_logging(level: LogLevel) {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(EnvFilter::new(level.filter_directive()))
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    });
}
