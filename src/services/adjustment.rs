//! Flight-schedule adjustment of the base forecast.

use crate::api::{ForecastSequence, ScheduleParams, DEFAULT_HORIZON};

/// Uniform per-hour crowd increment implied by the schedule.
///
/// The schedule's passenger impact is smoothed evenly across the 6-hour
/// window rather than weighted by hour.
pub fn hourly_adjustment(params: &ScheduleParams) -> f64 {
    let flight_passengers = (params.flights_per_hour * params.avg_capacity) as f64;
    let expected_lounge_passengers = flight_passengers * (params.access_rate_pct / 100.0);
    expected_lounge_passengers / DEFAULT_HORIZON as f64
}

/// Apply the schedule offset to a base forecast.
///
/// Each adjusted value is truncated to a whole guest count. Returns a new
/// sequence; the input is not mutated.
pub fn adjust(base: &[f64], params: &ScheduleParams) -> ForecastSequence {
    let offset = hourly_adjustment(params);
    base.iter().map(|p| (p + offset).trunc()).collect()
}
