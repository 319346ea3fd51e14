//! Public API surface for the lounge intelligence backend.
//!
//! This file consolidates the DTO types shared across the data, forecasting,
//! and analytics layers. All types derive Serialize/Deserialize for JSON
//! serialization.

pub use crate::services::analytics::{
    AnalyticsReport, ConfidenceInterval, CostComparison, SurgeLevel,
};
pub use crate::services::catering::{CateringLine, CateringOrder, SustainabilityReport};
pub use crate::services::pipeline::PipelineOutcome;
pub use crate::services::staffing::{StaffingBreakdown, StaffingPolicy};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Number of hours the default rollout forecasts ahead.
pub const DEFAULT_HORIZON: usize = 6;

/// Ordered sequence of forecast crowd values, index 0 = next hour.
pub type ForecastSequence = Vec<f64>;

/// Weekend test for the Monday-based week (5 = Saturday, 6 = Sunday).
pub fn is_weekend_day(day_of_week: u8) -> bool {
    day_of_week >= 5
}

/// Feature vector consumed by the prediction backend.
///
/// `prev_hour_crowd` is the lag feature: during a rollout it holds the
/// previous step's prediction rather than an observed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub hour: u8,
    pub day_of_week: u8,
    pub is_weekend: bool,
    pub flights: u32,
    pub avg_passengers: f64,
    pub prev_hour_crowd: f64,
}

impl FeatureRow {
    /// Build a row with the weekend flag derived from the day of week.
    pub fn with_calendar(
        hour: u8,
        day_of_week: u8,
        flights: u32,
        avg_passengers: f64,
        prev_hour_crowd: f64,
    ) -> Self {
        Self {
            hour,
            day_of_week,
            is_weekend: is_weekend_day(day_of_week),
            flights,
            avg_passengers,
            prev_hour_crowd,
        }
    }
}

/// One observed hour of lounge history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub timestamp: NaiveDateTime,
    pub hour: u8,
    pub day_of_week: u8,
    pub is_weekend: bool,
    pub flights: u32,
    pub avg_passengers: f64,
    pub crowd: f64,
}

impl HistoricalRecord {
    /// Feature fields of this record, with the given lag value attached.
    pub fn features_with_lag(&self, prev_hour_crowd: f64) -> FeatureRow {
        FeatureRow {
            hour: self.hour,
            day_of_week: self.day_of_week,
            is_weekend: self.is_weekend,
            flights: self.flights,
            avg_passengers: self.avg_passengers,
            prev_hour_crowd,
        }
    }
}

/// Operator-supplied flight schedule for the upcoming window.
///
/// Immutable per computation; validation is a boundary concern (the HTTP
/// layer and other callers run [`ScheduleParams::validate`] before handing
/// the params to the adjuster).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleParams {
    pub flights_per_hour: u32,
    pub avg_capacity: u32,
    pub access_rate_pct: f64,
}

impl ScheduleParams {
    pub const MIN_FLIGHTS_PER_HOUR: u32 = 1;
    pub const MAX_FLIGHTS_PER_HOUR: u32 = 15;
    pub const MIN_AVG_CAPACITY: u32 = 100;
    pub const MAX_AVG_CAPACITY: u32 = 400;
    pub const MIN_ACCESS_RATE_PCT: f64 = 5.0;
    pub const MAX_ACCESS_RATE_PCT: f64 = 40.0;

    /// Check that every parameter is inside its operational range.
    pub fn validate(&self) -> Result<(), String> {
        if !(Self::MIN_FLIGHTS_PER_HOUR..=Self::MAX_FLIGHTS_PER_HOUR)
            .contains(&self.flights_per_hour)
        {
            return Err(format!(
                "flights_per_hour {} outside [{}, {}]",
                self.flights_per_hour,
                Self::MIN_FLIGHTS_PER_HOUR,
                Self::MAX_FLIGHTS_PER_HOUR
            ));
        }
        if !(Self::MIN_AVG_CAPACITY..=Self::MAX_AVG_CAPACITY).contains(&self.avg_capacity) {
            return Err(format!(
                "avg_capacity {} outside [{}, {}]",
                self.avg_capacity,
                Self::MIN_AVG_CAPACITY,
                Self::MAX_AVG_CAPACITY
            ));
        }
        if !(Self::MIN_ACCESS_RATE_PCT..=Self::MAX_ACCESS_RATE_PCT)
            .contains(&self.access_rate_pct)
        {
            return Err(format!(
                "access_rate_pct {} outside [{}, {}]",
                self.access_rate_pct,
                Self::MIN_ACCESS_RATE_PCT,
                Self::MAX_ACCESS_RATE_PCT
            ));
        }
        Ok(())
    }
}

impl Default for ScheduleParams {
    fn default() -> Self {
        Self {
            flights_per_hour: 6,
            avg_capacity: 180,
            access_rate_pct: 15.0,
        }
    }
}
