//! End-to-end orchestration of the forecast pipeline.

use serde::{Deserialize, Serialize};

use crate::api::{ForecastSequence, ScheduleParams};
use crate::config::AnalyticsSettings;
use crate::data::FeatureStore;
use crate::error::CoreResult;
use crate::forecast::{CrowdForecaster, Predictor};

use super::adjustment::adjust;
use super::analytics::{compute_report, AnalyticsReport};

/// Everything one pipeline run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutcome {
    pub schedule: ScheduleParams,
    pub base_forecast: ForecastSequence,
    pub adjusted_forecast: ForecastSequence,
    pub report: AnalyticsReport,
}

/// Run seed → rollout → adjustment → analytics over immutable inputs.
///
/// Synchronous and single-threaded; each stage fully consumes the prior
/// stage's output. Concurrent callers can share the store and predictor
/// without locking because both are read-only here.
pub fn run_forecast_pipeline(
    store: &FeatureStore,
    predictor: &dyn Predictor,
    params: &ScheduleParams,
    settings: &AnalyticsSettings,
) -> CoreResult<PipelineOutcome> {
    let seed = store.seed_row()?;
    let base_forecast = CrowdForecaster::default().forecast(&seed, predictor)?;
    let adjusted_forecast = adjust(&base_forecast, params);
    log::debug!(
        "base forecast {:?} adjusted to {:?} by schedule {:?}",
        base_forecast,
        adjusted_forecast,
        params
    );

    let report = compute_report(&adjusted_forecast, &store.crowd_history(), settings)?;

    Ok(PipelineOutcome {
        schedule: *params,
        base_forecast,
        adjusted_forecast,
        report,
    })
}
