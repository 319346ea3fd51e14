//! Data Transfer Objects for the HTTP API.
//!
//! The pipeline's own types already derive Serialize/Deserialize and are
//! re-exported here; this module adds the request-side types.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    AnalyticsReport, CateringLine, ConfidenceInterval, CostComparison, PipelineOutcome,
    ScheduleParams, StaffingBreakdown, SurgeLevel, SustainabilityReport,
};

/// Query parameters for the forecast endpoint.
///
/// Omitted fields fall back to the schedule defaults; present fields are
/// range-checked before the pipeline runs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ForecastQuery {
    #[serde(default)]
    pub flights_per_hour: Option<u32>,
    #[serde(default)]
    pub avg_capacity: Option<u32>,
    #[serde(default)]
    pub access_rate_pct: Option<f64>,
}

impl ForecastQuery {
    /// Resolve to validated schedule params.
    pub fn into_params(self) -> Result<ScheduleParams, String> {
        let defaults = ScheduleParams::default();
        let params = ScheduleParams {
            flights_per_hour: self.flights_per_hour.unwrap_or(defaults.flights_per_hour),
            avg_capacity: self.avg_capacity.unwrap_or(defaults.avg_capacity),
            access_rate_pct: self.access_rate_pct.unwrap_or(defaults.access_rate_pct),
        };
        params.validate()?;
        Ok(params)
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of historical records backing the forecaster
    pub history_records: usize,
}
