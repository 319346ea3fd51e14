//! Rule-table prediction backend.

use crate::api::FeatureRow;

use super::Predictor;

/// Deployable stand-in for a fitted model.
///
/// The rule table follows the systematic structure of the historical lounge
/// data: a base level, morning and evening hour bands, a weekend uplift,
/// and linear flight/passenger terms. A fitted regression model plugs in
/// through the same [`Predictor`] trait without touching the forecaster.
#[derive(Debug, Clone)]
pub struct BaselinePredictor {
    pub base_crowd: f64,
    pub evening_uplift: f64,
    pub morning_uplift: f64,
    pub offpeak_uplift: f64,
    pub weekend_uplift: f64,
    pub per_flight: f64,
    pub per_passenger: f64,
}

impl Default for BaselinePredictor {
    fn default() -> Self {
        Self {
            base_crowd: 30.0,
            evening_uplift: 60.0,
            morning_uplift: 40.0,
            offpeak_uplift: 10.0,
            weekend_uplift: 20.0,
            per_flight: 5.0,
            per_passenger: 0.15,
        }
    }
}

impl Predictor for BaselinePredictor {
    fn predict(&self, row: &FeatureRow) -> anyhow::Result<f64> {
        let hour_uplift = match row.hour {
            17..=21 => self.evening_uplift,
            6..=9 => self.morning_uplift,
            _ => self.offpeak_uplift,
        };
        let weekend_uplift = if row.is_weekend {
            self.weekend_uplift
        } else {
            0.0
        };

        Ok(self.base_crowd
            + hour_uplift
            + weekend_uplift
            + row.flights as f64 * self.per_flight
            + row.avg_passengers * self.per_passenger)
    }
}
