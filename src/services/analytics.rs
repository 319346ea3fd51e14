//! Forecast-level analytics.
//!
//! Every function here is a pure transform of its inputs: volatility takes
//! an explicit slice instead of reading ambient state, and nothing calls
//! back into the data or forecasting layers. The aggregate report is
//! recomputed per forecast; nothing persists between calls.

use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_HORIZON;
use crate::config::AnalyticsSettings;
use crate::error::{CoreError, CoreResult};

use super::catering::{catering_plan, sustainability, CateringLine, SustainabilityReport};
use super::staffing::{
    guest_experience_score, multi_role_staffing, staffing_recommendation, StaffingBreakdown,
};

/// Interval around the forecast peak, widened by recent volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: i64,
    pub upper: i64,
    pub margin: i64,
}

/// Surge classification over the forecast window. Three terminal states,
/// recomputed per call; no transitions are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurgeLevel {
    Stable,
    Moderate,
    Severe,
}

/// Staffing cost of the forecast plan against the buffered baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostComparison {
    pub traditional_cost: i64,
    pub ai_cost: i64,
    /// May be negative: the forecast plan costing more than the baseline is
    /// surfaced as-is, never clamped.
    pub savings: i64,
}

/// Aggregate of every derived metric for one adjusted forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub current_crowd: i64,
    pub peak_crowd: i64,
    pub utilization_pct: f64,
    pub confidence: ConfidenceInterval,
    pub surge: SurgeLevel,
    pub staffing: StaffingBreakdown,
    pub minimum_staff: u32,
    pub guest_experience_score: i64,
    pub catering: Vec<CateringLine>,
    pub sustainability: SustainabilityReport,
    pub cost: CostComparison,
}

/// Sample standard deviation of the most recent `window` observations.
///
/// The window shrinks when fewer observations exist; a single observation
/// yields 0.0. Zero observations are an error because no margin can be
/// estimated at all.
pub fn recent_volatility(crowd: &[f64], window: usize) -> CoreResult<f64> {
    if crowd.is_empty() {
        return Err(CoreError::insufficient_history(
            "no historical observations to estimate volatility",
        ));
    }

    let tail = &crowd[crowd.len().saturating_sub(window)..];
    if tail.len() < 2 {
        return Ok(0.0);
    }

    let n = tail.len() as f64;
    let mean = tail.iter().sum::<f64>() / n;
    let variance = tail.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Ok(variance.sqrt())
}

/// Interval around the peak: `[peak - trunc(sigma), peak + trunc(sigma)]`.
pub fn confidence_interval(peak_crowd: i64, sigma: f64) -> ConfidenceInterval {
    let margin = sigma.trunc() as i64;
    ConfidenceInterval {
        lower: peak_crowd - margin,
        upper: peak_crowd + margin,
        margin,
    }
}

/// Peak crowd as a percentage of the configured capacity.
pub fn utilization(peak_crowd: i64, max_capacity: u32) -> f64 {
    peak_crowd as f64 / max_capacity as f64 * 100.0
}

/// Classify by the largest hour-over-hour increase across the forecast.
///
/// Boundaries use strict comparisons, so an exact growth of 25 or 15
/// classifies as the lower severity. Fewer than two points means no growth
/// is observable and the pattern counts as stable.
pub fn classify_surge(forecast: &[f64]) -> SurgeLevel {
    let max_growth = forecast
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold(f64::NEG_INFINITY, f64::max);

    if !max_growth.is_finite() {
        return SurgeLevel::Stable;
    }

    if max_growth > 25.0 {
        SurgeLevel::Severe
    } else if max_growth > 15.0 {
        SurgeLevel::Moderate
    } else {
        SurgeLevel::Stable
    }
}

/// Six-hour staffing cost of the forecast plan vs. the buffered baseline.
pub fn cost_comparison(total_staff: u32, settings: &AnalyticsSettings) -> CostComparison {
    let hours = DEFAULT_HORIZON as i64;
    let traditional_cost =
        settings.traditional_staff_baseline as i64 * settings.unit_staff_cost * hours;
    let ai_cost = total_staff as i64 * settings.unit_staff_cost * hours;
    CostComparison {
        traditional_cost,
        ai_cost,
        savings: traditional_cost - ai_cost,
    }
}

/// Derive the full report from an adjusted forecast and the crowd history.
///
/// Fails with `InsufficientHistory` when the history is empty (the
/// confidence interval cannot be estimated) and `DataUnavailable` when the
/// forecast itself is empty.
pub fn compute_report(
    adjusted: &[f64],
    crowd_history: &[f64],
    settings: &AnalyticsSettings,
) -> CoreResult<AnalyticsReport> {
    let peak = adjusted.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !peak.is_finite() {
        return Err(CoreError::data_unavailable("adjusted forecast is empty"));
    }
    let peak_crowd = peak as i64;
    let current_crowd = adjusted[0] as i64;

    let sigma = recent_volatility(crowd_history, settings.volatility_window)?;
    let staffing = multi_role_staffing(peak);
    let catering = catering_plan(adjusted);

    Ok(AnalyticsReport {
        current_crowd,
        peak_crowd,
        utilization_pct: utilization(peak_crowd, settings.max_capacity),
        confidence: confidence_interval(peak_crowd, sigma),
        surge: classify_surge(adjusted),
        staffing,
        minimum_staff: staffing_recommendation(peak),
        guest_experience_score: guest_experience_score(peak_crowd, staffing.service),
        sustainability: sustainability(&catering, settings.traditional_snacks_per_hour),
        catering,
        cost: cost_comparison(staffing.total, settings),
    })
}
