//! Phase thresholds used by the recommendation policy

use crate::models::Phase;

/// Score a phase must exceed for its recommendation to fire
pub struct PhaseThresholds;

impl PhaseThresholds {
    pub const RISK_OFF_EXIT: u32 = 75;
    pub const RISK_ON_ENTRY: u32 = 65;
    pub const STAY_RISK_ON_HOLD: u32 = 50;
    pub const STAY_RISK_OFF_WAIT: u32 = 50;

    /// Get threshold for a phase
    pub fn get(phase: Phase) -> u32 {
        match phase {
            Phase::RiskOff => Self::RISK_OFF_EXIT,
            Phase::RiskOn => Self::RISK_ON_ENTRY,
            Phase::StayRiskOn => Self::STAY_RISK_ON_HOLD,
            Phase::StayRiskOff => Self::STAY_RISK_OFF_WAIT,
        }
    }
}
