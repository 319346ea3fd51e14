//! Autoregressive crowd forecasting.
//!
//! The forecaster rolls a feature row forward one hour at a time, feeding
//! each prediction back in as the next step's lag feature. The prediction
//! backend is a single-method capability so fitted models, rule tables, and
//! test stubs are interchangeable.

mod baseline;

pub use baseline::BaselinePredictor;

use serde::{Deserialize, Serialize};

use crate::api::{is_weekend_day, FeatureRow, ForecastSequence, DEFAULT_HORIZON};
use crate::error::{CoreError, CoreResult};

/// Opaque prediction backend.
///
/// Implementations must return a non-negative crowd estimate for any valid
/// feature row; the forecaster rejects anything else.
pub trait Predictor {
    fn predict(&self, row: &FeatureRow) -> anyhow::Result<f64>;
}

/// How calendar features behave when a rollout crosses midnight.
///
/// `Frozen` keeps `day_of_week`/`is_weekend` at the seed's values even when
/// the hour wraps. This reproduces the behavior the historical models were
/// fitted against; whether the drift is intentional is unresolved upstream,
/// so the alternative stays selectable instead of being silently fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarRefreshPolicy {
    #[default]
    Frozen,
    Recomputed,
}

/// Multi-step-ahead forecaster over an opaque predictor.
///
/// Owns only its transient rollout state; the caller's seed row is copied,
/// never aliased or mutated.
#[derive(Debug, Clone, Copy)]
pub struct CrowdForecaster {
    horizon: usize,
    calendar: CalendarRefreshPolicy,
}

impl Default for CrowdForecaster {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            calendar: CalendarRefreshPolicy::Frozen,
        }
    }
}

impl CrowdForecaster {
    pub fn new(horizon: usize) -> Self {
        Self {
            horizon,
            calendar: CalendarRefreshPolicy::Frozen,
        }
    }

    pub fn with_calendar(mut self, calendar: CalendarRefreshPolicy) -> Self {
        self.calendar = calendar;
        self
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Produce the ordered forecast sequence via autoregressive feedback.
    ///
    /// Each step advances the hour, asks the predictor for an estimate,
    /// writes that estimate back as the next step's lag feature, and records
    /// it rounded to two decimals. A predictor error or an unusable value
    /// (negative, NaN, infinite) aborts the rollout; partial results are
    /// discarded, not returned.
    pub fn forecast(
        &self,
        seed: &FeatureRow,
        predictor: &dyn Predictor,
    ) -> CoreResult<ForecastSequence> {
        let mut row = seed.clone();
        let mut sequence = Vec::with_capacity(self.horizon);

        for step in 0..self.horizon {
            let wrapped = row.hour == 23;
            row.hour = (row.hour + 1) % 24;
            if wrapped && self.calendar == CalendarRefreshPolicy::Recomputed {
                row.day_of_week = (row.day_of_week + 1) % 7;
                row.is_weekend = is_weekend_day(row.day_of_week);
            }

            let pred = predictor.predict(&row).map_err(|e| {
                CoreError::forecast_failure(format!("prediction failed at step {}: {:#}", step, e))
            })?;
            if !pred.is_finite() || pred < 0.0 {
                return Err(CoreError::forecast_failure(format!(
                    "predictor returned unusable value {} at step {}",
                    pred, step
                )));
            }

            row.prev_hour_crowd = pred;
            sequence.push(round2(pred));
        }

        Ok(sequence)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct ConstantPredictor(f64);

    impl Predictor for ConstantPredictor {
        fn predict(&self, _row: &FeatureRow) -> anyhow::Result<f64> {
            Ok(self.0)
        }
    }

    /// Records every row it sees, then echoes the lag feature plus one.
    struct RecordingPredictor {
        seen: RefCell<Vec<FeatureRow>>,
    }

    impl RecordingPredictor {
        fn new() -> Self {
            Self {
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Predictor for RecordingPredictor {
        fn predict(&self, row: &FeatureRow) -> anyhow::Result<f64> {
            self.seen.borrow_mut().push(row.clone());
            Ok(row.prev_hour_crowd + 1.0)
        }
    }

    struct FailingPredictor {
        fail_at: usize,
        calls: RefCell<usize>,
    }

    impl Predictor for FailingPredictor {
        fn predict(&self, row: &FeatureRow) -> anyhow::Result<f64> {
            let mut calls = self.calls.borrow_mut();
            *calls += 1;
            if *calls > self.fail_at {
                anyhow::bail!("backend went away");
            }
            Ok(row.prev_hour_crowd)
        }
    }

    fn seed() -> FeatureRow {
        FeatureRow::with_calendar(10, 2, 6, 180.0, 50.0)
    }

    #[test]
    fn test_constant_predictor_yields_constant_sequence() {
        let forecast = CrowdForecaster::default()
            .forecast(&seed(), &ConstantPredictor(50.0))
            .unwrap();
        assert_eq!(forecast, vec![50.0; 6]);
    }

    #[test]
    fn test_hours_cycle_and_feedback_flows() {
        let predictor = RecordingPredictor::new();
        let forecast = CrowdForecaster::default()
            .forecast(&seed(), &predictor)
            .unwrap();

        let seen = predictor.seen.borrow();
        let hours: Vec<u8> = seen.iter().map(|r| r.hour).collect();
        assert_eq!(hours, vec![11, 12, 13, 14, 15, 16]);

        // Step k sees step k-1's prediction as its lag
        let lags: Vec<f64> = seen.iter().map(|r| r.prev_hour_crowd).collect();
        assert_eq!(lags, vec![50.0, 51.0, 52.0, 53.0, 54.0, 55.0]);
        assert_eq!(forecast, vec![51.0, 52.0, 53.0, 54.0, 55.0, 56.0]);
    }

    #[test]
    fn test_hour_wraps_past_midnight() {
        let predictor = RecordingPredictor::new();
        let late_seed = FeatureRow::with_calendar(22, 2, 6, 180.0, 50.0);
        CrowdForecaster::default()
            .forecast(&late_seed, &predictor)
            .unwrap();

        let hours: Vec<u8> = predictor.seen.borrow().iter().map(|r| r.hour).collect();
        assert_eq!(hours, vec![23, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_frozen_calendar_keeps_seed_day_across_midnight() {
        let predictor = RecordingPredictor::new();
        let late_seed = FeatureRow::with_calendar(22, 4, 6, 180.0, 50.0);
        CrowdForecaster::default()
            .forecast(&late_seed, &predictor)
            .unwrap();

        for row in predictor.seen.borrow().iter() {
            assert_eq!(row.day_of_week, 4);
            assert!(!row.is_weekend);
        }
    }

    #[test]
    fn test_recomputed_calendar_rolls_into_weekend() {
        let predictor = RecordingPredictor::new();
        // Friday 22:00; the rollout crosses into Saturday
        let late_seed = FeatureRow::with_calendar(22, 4, 6, 180.0, 50.0);
        CrowdForecaster::default()
            .with_calendar(CalendarRefreshPolicy::Recomputed)
            .forecast(&late_seed, &predictor)
            .unwrap();

        let seen = predictor.seen.borrow();
        assert_eq!(seen[0].day_of_week, 4);
        assert!(!seen[0].is_weekend);
        for row in &seen[1..] {
            assert_eq!(row.day_of_week, 5);
            assert!(row.is_weekend);
        }
    }

    #[test]
    fn test_seed_is_not_mutated() {
        let original = seed();
        let copy = original.clone();
        CrowdForecaster::default()
            .forecast(&original, &ConstantPredictor(99.0))
            .unwrap();
        assert_eq!(original, copy);
    }

    #[test]
    fn test_predictor_error_discards_partial_results() {
        let predictor = FailingPredictor {
            fail_at: 3,
            calls: RefCell::new(0),
        };
        let result = CrowdForecaster::default().forecast(&seed(), &predictor);
        assert!(matches!(result, Err(CoreError::ForecastFailure(_))));
    }

    #[test]
    fn test_negative_and_non_finite_predictions_rejected() {
        let result = CrowdForecaster::default().forecast(&seed(), &ConstantPredictor(-5.0));
        assert!(matches!(result, Err(CoreError::ForecastFailure(_))));

        let result = CrowdForecaster::default().forecast(&seed(), &ConstantPredictor(f64::NAN));
        assert!(matches!(result, Err(CoreError::ForecastFailure(_))));
    }

    #[test]
    fn test_predictions_rounded_to_two_decimals() {
        let forecast = CrowdForecaster::new(1)
            .forecast(&seed(), &ConstantPredictor(100.0 / 3.0))
            .unwrap();
        assert_eq!(forecast, vec![33.33]);
    }

    #[test]
    fn test_custom_horizon() {
        let forecast = CrowdForecaster::new(3)
            .forecast(&seed(), &ConstantPredictor(10.0))
            .unwrap();
        assert_eq!(forecast.len(), 3);
    }
}
