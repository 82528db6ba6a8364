//! Recommendation policy over phase scores

use crate::models::Phase;
use crate::signals::aggregation::PhaseScores;
use crate::signals::categories::PhaseThresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "SELL / HEDGE")]
    SellHedge,
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "HOLD")]
    Hold,
    #[serde(rename = "WAIT / CASH")]
    WaitCash,
    #[serde(rename = "NEUTRAL")]
    Neutral,
}

impl Recommendation {
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::SellHedge => "SELL / HEDGE",
            Recommendation::Buy => "BUY",
            Recommendation::Hold => "HOLD",
            Recommendation::WaitCash => "WAIT / CASH",
            Recommendation::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered decision list, first match wins:
/// exit beats entry, entry beats hold, hold beats wait.
const DECISION_ORDER: [(Phase, Recommendation); 4] = [
    (Phase::RiskOff, Recommendation::SellHedge),
    (Phase::RiskOn, Recommendation::Buy),
    (Phase::StayRiskOn, Recommendation::Hold),
    (Phase::StayRiskOff, Recommendation::WaitCash),
];

/// Recommendation for the current phase scores; missing phases score 0
pub fn recommend(scores: &PhaseScores) -> Recommendation {
    DECISION_ORDER
        .iter()
        .find(|(phase, _)| scores.score_of(*phase) > PhaseThresholds::get(*phase))
        .map(|(_, recommendation)| *recommendation)
        .unwrap_or(Recommendation::Neutral)
}
