//! Service layer: schedule adjustment, derived analytics, and pipeline
//! orchestration.
//!
//! Everything here is a pure transform of its inputs. The data and
//! forecasting layers feed these functions; nothing calls back up.

pub mod adjustment;

pub mod analytics;

pub mod catering;

pub mod pipeline;

pub mod staffing;

pub use adjustment::{adjust, hourly_adjustment};
pub use analytics::{
    classify_surge, compute_report, confidence_interval, cost_comparison, recent_volatility,
    utilization,
};
pub use catering::{catering_plan, menu_recommendation, sustainability};
pub use pipeline::run_forecast_pipeline;
pub use staffing::{guest_experience_score, multi_role_staffing, staffing_recommendation};
