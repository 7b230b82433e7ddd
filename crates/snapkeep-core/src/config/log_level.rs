//! Log verbosity accepted through `LOG_LEVEL`.

use serde::{Deserialize, Serialize};

/// Validated log level. Unknown or missing values fall back to `Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Critical,
    Error,
    Warning,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    /// Parse a raw level name. Matching is exact, as the accepted names are.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CRITICAL" => Some(Self::Critical),
            "ERROR" => Some(Self::Error),
            "WARNING" => Some(Self::Warning),
            "INFO" => Some(Self::Info),
            "DEBUG" => Some(Self::Debug),
            _ => None,
        }
    }

    /// Resolve an optional raw value, ignoring anything unrecognized.
    pub fn resolve(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or_default()
    }

    /// Filter directive understood by `tracing-subscriber`'s `EnvFilter`.
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Self::Critical | Self::Error => "error",
            Self::Warning => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_accepted_name() {
        for level in [
            LogLevel::Critical,
            LogLevel::Error,
            LogLevel::Warning,
            LogLevel::Info,
            LogLevel::Debug,
        ] {
            assert_eq!(LogLevel::parse(level.as_str()), Some(level));
        }
    }

    #[test]
    fn unknown_or_missing_falls_back_to_info() {
        assert_eq!(LogLevel::resolve(None), LogLevel::Info);
        assert_eq!(LogLevel::resolve(Some("TRACE")), LogLevel::Info);
        assert_eq!(LogLevel::resolve(Some("debug")), LogLevel::Info);
        assert_eq!(LogLevel::resolve(Some("DEBUG")), LogLevel::Debug);
    }

    #[test]
    fn critical_shares_error_directive() {
        assert_eq!(LogLevel::Critical.filter_directive(), "error");
        assert_eq!(LogLevel::Warning.filter_directive(), "warn");
    }
}
