//! Configuration file support.
//!
//! Reads the optional `lounge.toml` configuration: where the historical CSV
//! lives, whether to persist the lag-augmented table, and the analytics
//! constants. Every setting has a default so the library works without any
//! file present.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoungeConfig {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub analytics: AnalyticsSettings,
}

/// Historical data locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_history_csv")]
    pub history_csv: PathBuf,
    /// Where to persist the lag-augmented table; omitted = no persistence.
    #[serde(default)]
    pub processed_csv: Option<PathBuf>,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            history_csv: default_history_csv(),
            processed_csv: None,
        }
    }
}

fn default_history_csv() -> PathBuf {
    PathBuf::from("data/raw/lounge_data.csv")
}

/// Constants consumed by the analytics derivations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSettings {
    /// Lounge seat capacity used for the utilization metric.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u32,
    /// Cost of one staffer for one hour.
    #[serde(default = "default_unit_staff_cost")]
    pub unit_staff_cost: i64,
    /// Buffer staffing assumed by the traditional (non-forecast) plan.
    #[serde(default = "default_traditional_staff_baseline")]
    pub traditional_staff_baseline: u32,
    /// Fixed snack stock per hour under the traditional plan.
    #[serde(default = "default_traditional_snacks_per_hour")]
    pub traditional_snacks_per_hour: u32,
    /// How many recent observations feed the volatility estimate.
    #[serde(default = "default_volatility_window")]
    pub volatility_window: usize,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
            unit_staff_cost: default_unit_staff_cost(),
            traditional_staff_baseline: default_traditional_staff_baseline(),
            traditional_snacks_per_hour: default_traditional_snacks_per_hour(),
            volatility_window: default_volatility_window(),
        }
    }
}

fn default_max_capacity() -> u32 {
    200
}

fn default_unit_staff_cost() -> i64 {
    500
}

fn default_traditional_staff_baseline() -> u32 {
    15
}

fn default_traditional_snacks_per_hour() -> u32 {
    150
}

fn default_volatility_window() -> usize {
    48
}

impl LoungeConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            CoreError::configuration(format!(
                "failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        toml::from_str(&content)
            .map_err(|e| CoreError::configuration(format!("failed to parse config file: {}", e)))
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `lounge.toml` in the current directory, `config/`, and
    /// the parent directory.
    pub fn from_default_location() -> CoreResult<Self> {
        let search_paths = [
            PathBuf::from("lounge.toml"),
            PathBuf::from("config/lounge.toml"),
            PathBuf::from("../lounge.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(CoreError::configuration(
            "no lounge.toml found in standard locations",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: LoungeConfig = toml::from_str("").unwrap();
        assert_eq!(config.data.history_csv, default_history_csv());
        assert!(config.data.processed_csv.is_none());
        assert_eq!(config.analytics.max_capacity, 200);
        assert_eq!(config.analytics.unit_staff_cost, 500);
        assert_eq!(config.analytics.traditional_staff_baseline, 15);
        assert_eq!(config.analytics.traditional_snacks_per_hour, 150);
        assert_eq!(config.analytics.volatility_window, 48);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[data]
history_csv = "history/lounge.csv"
processed_csv = "history/processed.csv"

[analytics]
max_capacity = 250
unit_staff_cost = 650
volatility_window = 72
"#;

        let config: LoungeConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.data.history_csv, PathBuf::from("history/lounge.csv"));
        assert_eq!(
            config.data.processed_csv,
            Some(PathBuf::from("history/processed.csv"))
        );
        assert_eq!(config.analytics.max_capacity, 250);
        assert_eq!(config.analytics.unit_staff_cost, 650);
        assert_eq!(config.analytics.volatility_window, 72);
        // Untouched settings keep their defaults
        assert_eq!(config.analytics.traditional_staff_baseline, 15);
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let result = LoungeConfig::from_file("/nonexistent/lounge.toml");
        assert!(matches!(
            result,
            Err(crate::error::CoreError::Configuration(_))
        ));
    }
}
