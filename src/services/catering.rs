//! Catering quantities and the sustainability derivation.

use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_HORIZON;

/// Quantities to stock for one hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CateringOrder {
    pub snacks: u32,
    pub drinks: u32,
    pub meals: u32,
}

/// Stock for an expected crowd.
///
/// Demand assumptions: 70% of guests take snacks, 50% beverages, 25% meals,
/// each with a 10% buffer on top.
pub fn menu_recommendation(crowd: f64) -> CateringOrder {
    CateringOrder {
        snacks: (crowd * 0.7 * 1.1) as u32,
        drinks: (crowd * 0.5 * 1.1) as u32,
        meals: (crowd * 0.25 * 1.1) as u32,
    }
}

/// One catering row per forecast hour (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CateringLine {
    pub hour: u32,
    pub crowd: i64,
    pub snacks: u32,
    pub drinks: u32,
    pub meals: u32,
}

/// Per-hour catering plan for an adjusted forecast.
pub fn catering_plan(forecast: &[f64]) -> Vec<CateringLine> {
    forecast
        .iter()
        .enumerate()
        .map(|(i, &crowd)| {
            let order = menu_recommendation(crowd);
            CateringLine {
                hour: i as u32 + 1,
                crowd: crowd as i64,
                snacks: order.snacks,
                drinks: order.drinks,
                meals: order.meals,
            }
        })
        .collect()
}

/// Waste-reduction outcome against the fixed-stock baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityReport {
    pub traditional_snacks: u32,
    pub ai_snacks: u32,
    pub waste_reduction: u32,
    pub score: f64,
}

/// Compare the plan's snack total against a fixed per-hour stock over the
/// 6-hour window. The score is the reduction as a percentage, clamped to
/// `[0, 100]`; a plan that stocks more than the baseline scores 0.
pub fn sustainability(
    plan: &[CateringLine],
    traditional_snacks_per_hour: u32,
) -> SustainabilityReport {
    let traditional_snacks = traditional_snacks_per_hour * DEFAULT_HORIZON as u32;
    let ai_snacks: u32 = plan.iter().map(|line| line.snacks).sum();
    let waste_reduction = traditional_snacks.saturating_sub(ai_snacks);
    let score = if traditional_snacks == 0 {
        0.0
    } else {
        (waste_reduction as f64 / traditional_snacks as f64 * 100.0).clamp(0.0, 100.0)
    };

    SustainabilityReport {
        traditional_snacks,
        ai_snacks,
        waste_reduction,
        score,
    }
}
