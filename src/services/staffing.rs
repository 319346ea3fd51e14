//! Staffing policies and the guest-experience derivation.
//!
//! Two competing policies coexist on purpose: the role-split plan with no
//! minimum floor, and the older one-per-20 rule with a floor of three.
//! Call sites rely on both, so each stays independently callable.

use serde::{Deserialize, Serialize};

/// Per-role staffing derived from a crowd level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingBreakdown {
    pub service: u32,
    pub kitchen: u32,
    pub cleaning: u32,
    pub total: u32,
}

/// Role-split staffing: one service staffer per 25 guests, kitchen per 40,
/// cleaning per 60. No minimum floor is enforced at this layer.
pub fn multi_role_staffing(crowd: f64) -> StaffingBreakdown {
    let service = (crowd / 25.0) as u32;
    let kitchen = (crowd / 40.0) as u32;
    let cleaning = (crowd / 60.0) as u32;
    StaffingBreakdown {
        service,
        kitchen,
        cleaning,
        total: service + kitchen + cleaning,
    }
}

/// Simple coverage policy: one staffer per 20 guests, never fewer than 3.
pub fn staffing_recommendation(crowd: f64) -> u32 {
    ((crowd / 20.0).ceil() as u32).max(3)
}

/// The two staffing strategies in use; call sites pick one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffingPolicy {
    MultiRole,
    FloorOfThree,
}

impl StaffingPolicy {
    /// Total staff under this policy for the given crowd.
    pub fn total_staff(&self, crowd: f64) -> u32 {
        match self {
            StaffingPolicy::MultiRole => multi_role_staffing(crowd).total,
            StaffingPolicy::FloorOfThree => staffing_recommendation(crowd),
        }
    }
}

/// Service quality estimate.
///
/// Each service staffer covers 20 guests; every guest beyond that coverage
/// costs one point off a 100-point score.
pub fn guest_experience_score(peak_crowd: i64, service_staff: u32) -> i64 {
    let capacity = service_staff as i64 * 20;
    (100 - (peak_crowd - capacity).max(0)).clamp(0, 100)
}
