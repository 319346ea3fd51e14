//! Error types for the forecasting core.
//!
//! Each pipeline stage fails fast with a specific kind rather than a generic
//! error; nothing in the core substitutes defaults for missing inputs or
//! retries on its own.

/// Result type for core pipeline operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Error type for the forecasting and analytics pipeline.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// History too short or malformed to derive features from.
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    /// The prediction backend failed or returned an unusable value.
    /// Partial rollout output is discarded, never surfaced.
    #[error("forecast failure: {0}")]
    ForecastFailure(String),

    /// Volatility was requested with zero historical observations.
    /// Other analytics can still proceed independently.
    #[error("insufficient history: {0}")]
    InsufficientHistory(String),

    /// Configuration file missing or malformed.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    /// Create a data-unavailable error.
    pub fn data_unavailable(message: impl Into<String>) -> Self {
        Self::DataUnavailable(message.into())
    }

    /// Create a forecast-failure error.
    pub fn forecast_failure(message: impl Into<String>) -> Self {
        Self::ForecastFailure(message.into())
    }

    /// Create an insufficient-history error.
    pub fn insufficient_history(message: impl Into<String>) -> Self {
        Self::InsufficientHistory(message.into())
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = CoreError::data_unavailable("only 1 record");
        assert_eq!(err.to_string(), "data unavailable: only 1 record");

        let err = CoreError::forecast_failure("model exploded");
        assert!(err.to_string().starts_with("forecast failure"));

        let err = CoreError::insufficient_history("empty series");
        assert!(err.to_string().contains("empty series"));
    }

    #[test]
    fn test_constructors_produce_matching_variants() {
        assert!(matches!(
            CoreError::configuration("bad toml"),
            CoreError::Configuration(_)
        ));
        assert!(matches!(
            CoreError::insufficient_history("x"),
            CoreError::InsufficientHistory(_)
        ));
    }
}
