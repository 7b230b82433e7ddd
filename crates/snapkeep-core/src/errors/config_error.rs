/// Configuration errors. Always raised before any backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing or invalid value for DB_INSTANCE_ID")]
    MissingResourceId,

    #[error(
        "Valid value for either SNAPSHOT_MAX_AGE_IN_DAYS or SNAPSHOT_MAX_AGE_IN_MONTHS must be specified"
    )]
    MissingMaxAge,

    #[error("Invalid value for {key}: '{value}' is not a non-negative integer")]
    InvalidNumber { key: String, value: String },

    #[error("Value for {key} is too large to express as a duration")]
    DurationOverflow { key: String },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingResourceId => "MISSING_RESOURCE_ID",
            Self::MissingMaxAge => "MISSING_MAX_AGE",
            Self::InvalidNumber { .. } => "INVALID_NUMBER",
            Self::DurationOverflow { .. } => "DURATION_OVERFLOW",
        }
    }
}
